#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_token_is_none_outside_browser() {
    assert_eq!(read_token(), None);
}

#[test]
fn store_and_clear_are_noops_but_callable() {
    store_token("jwt-abc");
    clear_token();
    assert_eq!(read_token(), None);
}

#[test]
fn take_token_is_none_outside_browser() {
    assert_eq!(take_token(), None);
}
