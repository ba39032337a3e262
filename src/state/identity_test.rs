use super::*;
use crate::net::types::UserType;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> AccountUser {
    AccountUser {
        id: "u-1".to_owned(),
        email: "thais@example.com".to_owned(),
        full_name: Some("Thais Oliveira".to_owned()),
        user_type: Some(UserType::Student),
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_state_is_unauthenticated_and_loading() {
    let state = SessionState::default();
    assert_eq!(state.identity, Identity::Unauthenticated);
    assert_eq!(state.status, SessionStatus::Loading);
    assert!(state.is_loading());
    assert!(!state.is_resolved());
    assert!(!state.is_signed_in());
    assert_eq!(state.user(), None);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_with_user_authenticates_and_resolves() {
    let mut state = SessionState::default();
    state.resolve(Some(make_user()));
    assert_eq!(state.identity, Identity::Authenticated(make_user()));
    assert!(state.is_resolved());
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u-1"));
}

#[test]
fn resolve_without_user_settles_unauthenticated() {
    let mut state = SessionState::default();
    state.resolve(None);
    assert_eq!(state.identity, Identity::Unauthenticated);
    assert!(state.is_resolved());
}

#[test]
fn resolve_without_user_keeps_guest_session() {
    // Guest entered while the persisted-session lookup was in flight.
    let mut state = SessionState::default();
    state.enter_guest();
    state.resolve(None);
    assert_eq!(state.identity, Identity::Guest);
    assert!(state.is_resolved());
}

#[test]
fn resolve_with_user_replaces_guest_session() {
    let mut state = SessionState::default();
    state.enter_guest();
    state.resolve(Some(make_user()));
    assert_eq!(state.identity, Identity::Authenticated(make_user()));
}

#[test]
fn resolution_is_idempotent() {
    let mut state = SessionState::default();
    state.resolve(None);
    state.resolve(None);
    assert_eq!(state.identity, Identity::Unauthenticated);
    assert!(state.is_resolved());
}

// =============================================================
// Interactive transitions
// =============================================================

#[test]
fn apply_sign_in_authenticates_and_resolves() {
    let mut state = SessionState::default();
    state.apply_sign_in(make_user());
    assert!(state.is_resolved());
    assert!(state.is_signed_in());
    assert_eq!(state.user(), Some(&make_user()));
}

#[test]
fn enter_guest_is_signed_in_without_account() {
    let mut state = SessionState::default();
    state.enter_guest();
    assert!(state.is_guest());
    assert!(state.is_signed_in());
    assert_eq!(state.user(), None);
}

#[test]
fn clear_drops_identity_but_not_resolution() {
    let mut state = SessionState::default();
    state.apply_sign_in(make_user());
    state.clear();
    assert_eq!(state.identity, Identity::Unauthenticated);
    assert!(state.is_resolved());
    assert!(!state.is_signed_in());
}

#[test]
fn clear_while_loading_stays_loading() {
    let mut state = SessionState::default();
    state.clear();
    assert!(state.is_loading());
}

#[test]
fn clear_exits_guest_mode() {
    let mut state = SessionState::default();
    state.enter_guest();
    state.clear();
    assert!(!state.is_guest());
    assert!(!state.is_signed_in());
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_prefers_full_name() {
    let mut state = SessionState::default();
    state.apply_sign_in(make_user());
    assert_eq!(state.display_name(), "Thais Oliveira");
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    let mut user = make_user();
    user.full_name = None;
    let mut state = SessionState::default();
    state.apply_sign_in(user);
    assert_eq!(state.display_name(), "thais");
}

#[test]
fn display_name_for_guest_is_mascot() {
    let mut state = SessionState::default();
    state.enter_guest();
    assert_eq!(state.display_name(), GUEST_DISPLAY_NAME);
}
