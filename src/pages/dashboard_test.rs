use super::*;

#[test]
fn greeting_uses_display_name() {
    assert_eq!(greeting_for("Thais Souza"), "Olá, Thais Souza! 👋");
}

#[test]
fn greeting_works_for_guest_mascot() {
    assert_eq!(greeting_for("Puffer"), "Olá, Puffer! 👋");
}

#[test]
fn every_nav_card_links_to_an_app_route() {
    for (href, ..) in NAV_CARDS {
        assert!(href.starts_with('/'), "{href} is not an absolute route");
    }
}
