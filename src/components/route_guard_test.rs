use super::*;
use crate::net::types::{AccountUser, UserType};

// =============================================================
// Helpers
// =============================================================

fn loading() -> SessionState {
    SessionState::default()
}

fn resolved_unauthenticated() -> SessionState {
    let mut state = SessionState::default();
    state.resolve(None);
    state
}

fn resolved_guest() -> SessionState {
    let mut state = SessionState::default();
    state.enter_guest();
    state
}

fn resolved_account() -> SessionState {
    let mut state = SessionState::default();
    state.resolve(Some(AccountUser {
        id: "u-1".to_owned(),
        email: "thais@example.com".to_owned(),
        full_name: None,
        user_type: Some(UserType::Teacher),
    }));
    state
}

// =============================================================
// Loading suppresses both rendering and redirects
// =============================================================

#[test]
fn unresolved_session_is_pending_for_both_policies() {
    assert_eq!(evaluate(AccessPolicy::AllowGuest, &loading()), GuardOutcome::Pending);
    assert_eq!(
        evaluate(AccessPolicy::RequireAccount, &loading()),
        GuardOutcome::Pending
    );
}

// =============================================================
// AllowGuest
// =============================================================

#[test]
fn allow_guest_renders_for_guest_and_account() {
    assert_eq!(
        evaluate(AccessPolicy::AllowGuest, &resolved_guest()),
        GuardOutcome::Render
    );
    assert_eq!(
        evaluate(AccessPolicy::AllowGuest, &resolved_account()),
        GuardOutcome::Render
    );
}

#[test]
fn allow_guest_redirects_unauthenticated() {
    assert_eq!(
        evaluate(AccessPolicy::AllowGuest, &resolved_unauthenticated()),
        GuardOutcome::Redirect
    );
}

// =============================================================
// RequireAccount
// =============================================================

#[test]
fn require_account_renders_only_for_account() {
    assert_eq!(
        evaluate(AccessPolicy::RequireAccount, &resolved_account()),
        GuardOutcome::Render
    );
}

#[test]
fn require_account_redirects_guest() {
    assert_eq!(
        evaluate(AccessPolicy::RequireAccount, &resolved_guest()),
        GuardOutcome::Redirect
    );
}

#[test]
fn require_account_redirects_unauthenticated() {
    assert_eq!(
        evaluate(AccessPolicy::RequireAccount, &resolved_unauthenticated()),
        GuardOutcome::Redirect
    );
}

// =============================================================
// Sign-out flips a rendered route to a redirect
// =============================================================

#[test]
fn clearing_session_turns_render_into_redirect() {
    let mut state = resolved_account();
    assert_eq!(
        evaluate(AccessPolicy::RequireAccount, &state),
        GuardOutcome::Render
    );
    state.clear();
    assert_eq!(
        evaluate(AccessPolicy::RequireAccount, &state),
        GuardOutcome::Redirect
    );
}
