//! Identity context: the single owner of session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the root of the component tree. Pages and guards read
//! session state through [`IdentityContext::state`]; every mutation goes
//! through the operations here so the store has exactly one writer.
//!
//! DESIGN
//! ======
//! On mount (browser only) a resolution task checks `localStorage` for a
//! persisted token and asks the backend who it belongs to. Whatever the
//! answer, the session always reaches a resolved state: lookup failures
//! are logged and converted into "no session" rather than left pending.
//! An alive flag guards the task so a late response cannot write into an
//! unmounted provider.
//!
//! ERROR HANDLING
//! ==============
//! Interactive operations return [`AuthError`] for the entry form to
//! display. Sign-out clears local state unconditionally and only then
//! fires the remote termination call, logging a warning if it fails.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;

use super::error::AuthError;
use crate::net::api::{self, ApiError};
use crate::net::types::{AccountUser, SignUpRequest, SignupResponse, TokenResponse};
use crate::state::identity::SessionState;
use crate::util::session_store;

/// How a successful registration left the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The backend issued a session right away; the user is signed in.
    SessionIssued,
    /// The account was created but email confirmation is still pending.
    ConfirmationRequired,
}

/// Handle to the session store and its operations.
///
/// `Copy` so components and spawned tasks can capture it freely.
#[derive(Clone, Copy)]
pub struct IdentityContext {
    state: RwSignal<SessionState>,
}

impl IdentityContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Read-only view of the session state for guards and pages.
    #[must_use]
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Sign in with email and password.
    ///
    /// On success the token is persisted and the store flips to an
    /// authenticated, resolved session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the backend rejects
    /// the credentials and [`AuthError::Network`] on transport problems.
    pub async fn sign_in(self, email: &str, password: &str) -> Result<(), AuthError> {
        let resp = api::sign_in_with_password(email, password).await;
        let (token, user) = sign_in_outcome(resp)?;
        session_store::store_token(&token);
        self.state.update(|state| state.apply_sign_in(user));
        Ok(())
    }

    /// Register a new account.
    ///
    /// When the backend issues a session immediately the store is updated
    /// exactly as for a sign-in; otherwise the caller learns confirmation
    /// is pending and the store is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RegistrationFailed`] when the backend refuses
    /// the registration and [`AuthError::Network`] on transport problems.
    pub async fn sign_up(self, req: &SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        let resp = api::register_account(req).await;
        match sign_up_acceptance(resp)? {
            Acceptance::Issued { token, user } => {
                session_store::store_token(&token);
                self.state.update(|state| state.apply_sign_in(user));
                Ok(SignUpOutcome::SessionIssued)
            }
            Acceptance::Pending => Ok(SignUpOutcome::ConfirmationRequired),
        }
    }

    /// Enter guest mode. Local only; no backend call, nothing persisted.
    pub fn sign_in_as_guest(self) {
        self.state.update(SessionState::enter_guest);
    }

    /// Drop the current session.
    ///
    /// Local state and the persisted token are cleared synchronously and
    /// unconditionally. If an account session existed, the backend
    /// termination runs as a detached task whose failure is only logged.
    pub fn sign_out(self) {
        let mut cleared = self.state.get_untracked();
        let had_account = sign_out_transition(&mut cleared);
        self.state.set(cleared);

        if let Some(token) = session_store::take_token() {
            if had_account {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    if let Err(err) = api::terminate_session(&token).await {
                        log::warn!("remote session termination failed: {err}");
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = token;
            }
        }
    }

    /// Feed the persisted-session lookup result into the store.
    pub fn apply_resolution(self, user: Option<AccountUser>) {
        self.state.update(|state| state.resolve(user));
    }
}

impl Default for IdentityContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the identity context provided by [`IdentityProvider`].
///
/// # Panics
///
/// Panics if called outside an [`IdentityProvider`] subtree.
#[must_use]
pub fn use_identity() -> IdentityContext {
    expect_context::<IdentityContext>()
}

/// Owns the session store and kicks off session resolution on mount.
#[component]
pub fn IdentityProvider(children: Children) -> impl IntoView {
    let identity = IdentityContext::new();
    provide_context(identity);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_for_task = alive.clone();
        leptos::task::spawn_local(async move {
            let resolution = resolve_persisted_session().await;
            // Drop the result if the provider unmounted mid-flight.
            if alive_for_task.load(Ordering::Relaxed) {
                identity.apply_resolution(resolution);
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    children()
}

/// Resolve a persisted token to its account, or `None` for a definite
/// "no session". Transport failures are absorbed here; the splash
/// sequencer's watchdog covers the case where this never returns.
#[cfg(feature = "hydrate")]
async fn resolve_persisted_session() -> Option<AccountUser> {
    let token = session_store::read_token()?;
    match api::fetch_session_user(&token).await {
        Ok(Some(payload)) => Some(AccountUser::from_payload(payload)),
        Ok(None) => {
            // Expired or revoked token; drop it so future loads skip the call.
            session_store::clear_token();
            None
        }
        Err(err) => {
            log::warn!("session resolution failed: {err}");
            None
        }
    }
}

// ============================================================================
// Pure transition helpers
// ============================================================================

/// Map a password-grant result to a token + normalized account.
fn sign_in_outcome(
    resp: Result<TokenResponse, ApiError>,
) -> Result<(String, AccountUser), AuthError> {
    match resp {
        Ok(token) => {
            let user = AccountUser::from_payload(token.user);
            Ok((token.access_token, user))
        }
        Err(err) => Err(rejection_error(err, AuthError::InvalidCredentials)),
    }
}

/// How the backend answered a registration.
#[derive(Debug)]
enum Acceptance {
    Issued { token: String, user: AccountUser },
    Pending,
}

/// Map a signup result to an acceptance, normalizing the user when a
/// session was issued.
fn sign_up_acceptance(resp: Result<SignupResponse, ApiError>) -> Result<Acceptance, AuthError> {
    match resp {
        Ok(SignupResponse::Session { access_token, user }) => Ok(Acceptance::Issued {
            token: access_token,
            user: AccountUser::from_payload(user),
        }),
        Ok(SignupResponse::Pending) => Ok(Acceptance::Pending),
        Err(err) => Err(rejection_error(err, AuthError::RegistrationFailed)),
    }
}

/// Clear the session, reporting whether an account session was dropped
/// (and therefore whether remote termination is worth attempting).
fn sign_out_transition(state: &mut SessionState) -> bool {
    let had_account = state.user().is_some();
    state.clear();
    had_account
}

/// Classify a transport error: 4xx carries a backend rejection message,
/// everything else is a connectivity-shaped failure.
fn rejection_error(err: ApiError, rejected: fn(String) -> AuthError) -> AuthError {
    match err {
        ApiError::Http { status, message } if status < 500 => rejected(message),
        ApiError::Http { message, .. } => AuthError::Network(message),
        ApiError::Network(detail) | ApiError::Decode(detail) => AuthError::Network(detail),
        ApiError::Unavailable => AuthError::Network(ApiError::Unavailable.to_string()),
    }
}
