use super::*;
use crate::net::types::{SessionUserPayload, UserMetadata};
use crate::state::identity::Identity;

// =============================================================
// Helpers
// =============================================================

fn make_payload() -> SessionUserPayload {
    SessionUserPayload {
        id: "u-1".to_owned(),
        email: Some("thais@example.com".to_owned()),
        user_metadata: UserMetadata {
            full_name: Some("Thais Oliveira".to_owned()),
            user_type: Some("student".to_owned()),
        },
    }
}

fn make_token_response() -> TokenResponse {
    TokenResponse {
        access_token: "jwt-abc".to_owned(),
        user: make_payload(),
    }
}

// =============================================================
// Sign-in mapping
// =============================================================

#[test]
fn sign_in_outcome_extracts_token_and_user() {
    let (token, user) = sign_in_outcome(Ok(make_token_response())).unwrap();
    assert_eq!(token, "jwt-abc");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.full_name.as_deref(), Some("Thais Oliveira"));
}

#[test]
fn sign_in_outcome_maps_rejection_to_invalid_credentials() {
    let err = sign_in_outcome(Err(ApiError::Http {
        status: 400,
        message: "Invalid login credentials".to_owned(),
    }))
    .unwrap_err();
    assert_eq!(
        err,
        AuthError::InvalidCredentials("Invalid login credentials".to_owned())
    );
}

#[test]
fn sign_in_outcome_maps_server_failure_to_network() {
    let err = sign_in_outcome(Err(ApiError::Http {
        status: 500,
        message: "HTTP 500".to_owned(),
    }))
    .unwrap_err();
    assert_eq!(err, AuthError::Network("HTTP 500".to_owned()));
}

#[test]
fn sign_in_outcome_passes_through_connection_detail() {
    let err = sign_in_outcome(Err(ApiError::Network("timeout".to_owned()))).unwrap_err();
    assert_eq!(err, AuthError::Network("timeout".to_owned()));
}

// =============================================================
// Sign-up mapping
// =============================================================

#[test]
fn sign_up_acceptance_detects_issued_session() {
    let resp = Ok(SignupResponse::Session {
        access_token: "jwt-abc".to_owned(),
        user: make_payload(),
    });
    match sign_up_acceptance(resp).unwrap() {
        Acceptance::Issued { token, user } => {
            assert_eq!(token, "jwt-abc");
            assert_eq!(user.email, "thais@example.com");
        }
        Acceptance::Pending => panic!("expected issued session"),
    }
}

#[test]
fn sign_up_acceptance_detects_pending_confirmation() {
    let resp = Ok(SignupResponse::Pending);
    assert!(matches!(sign_up_acceptance(resp).unwrap(), Acceptance::Pending));
}

#[test]
fn sign_up_acceptance_maps_rejection_to_registration_failed() {
    let err = sign_up_acceptance(Err(ApiError::Http {
        status: 422,
        message: "Password should be at least 6 characters".to_owned(),
    }))
    .unwrap_err();
    assert_eq!(
        err,
        AuthError::RegistrationFailed("Password should be at least 6 characters".to_owned())
    );
}

// =============================================================
// Sign-out transition
// =============================================================

#[test]
fn sign_out_transition_reports_dropped_account() {
    let mut state = SessionState::default();
    state.resolve(Some(AccountUser::from_payload(make_payload())));
    assert!(sign_out_transition(&mut state));
    assert_eq!(state.identity, Identity::Unauthenticated);
    assert!(state.is_resolved());
}

#[test]
fn sign_out_transition_for_guest_skips_remote_call() {
    let mut state = SessionState::default();
    state.enter_guest();
    assert!(!sign_out_transition(&mut state));
    assert_eq!(state.identity, Identity::Unauthenticated);
}

#[test]
fn sign_out_transition_without_session_is_harmless() {
    let mut state = SessionState::default();
    assert!(!sign_out_transition(&mut state));
    assert!(state.is_loading());
}
