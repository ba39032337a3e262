//! Session identity state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the splash sequencer, and user-aware components all key
//! off this state to decide what to render and where to redirect. It is
//! owned by the session provider and mutated only through its operations.
//!
//! DESIGN
//! ======
//! `Identity` distinguishes "no session" from "browsing as guest" from
//! "signed in", and `SessionStatus` separately records whether the
//! persisted-session lookup has finished. Keeping the two independent
//! lets guards suppress both rendering and redirects until the first
//! resolution lands, so a signed-in user never sees a login flash on
//! reload.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::net::types::AccountUser;

/// Display name used while browsing as a guest.
pub const GUEST_DISPLAY_NAME: &str = "Puffer";

/// Who the current visitor is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Identity {
    /// No session: not signed in and not browsing as guest.
    #[default]
    Unauthenticated,
    /// Local guest session with no backend account.
    Guest,
    /// Signed-in account holder.
    Authenticated(AccountUser),
}

/// Whether the initial persisted-session lookup has completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Lookup still in flight; identity is not yet trustworthy.
    #[default]
    Loading,
    /// Lookup finished; identity reflects a definite answer.
    Resolved,
}

/// Combined identity + resolution status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Identity,
    pub status: SessionStatus,
}

impl SessionState {
    /// Apply the result of the persisted-session lookup.
    ///
    /// Always marks the state resolved. A negative answer never demotes a
    /// guest session the user entered while the lookup was in flight.
    pub fn resolve(&mut self, user: Option<AccountUser>) {
        match user {
            Some(user) => self.identity = Identity::Authenticated(user),
            None => {
                if self.identity != Identity::Guest {
                    self.identity = Identity::Unauthenticated;
                }
            }
        }
        self.status = SessionStatus::Resolved;
    }

    /// Record a fresh interactive sign-in.
    pub fn apply_sign_in(&mut self, user: AccountUser) {
        self.identity = Identity::Authenticated(user);
        self.status = SessionStatus::Resolved;
    }

    /// Enter guest mode. Purely local; resolves the session immediately.
    pub fn enter_guest(&mut self) {
        self.identity = Identity::Guest;
        self.status = SessionStatus::Resolved;
    }

    /// Drop the current identity (sign-out or guest exit).
    ///
    /// The resolution status is left untouched: once the session has been
    /// resolved it stays resolved.
    pub fn clear(&mut self) {
        self.identity = Identity::Unauthenticated;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status == SessionStatus::Resolved
    }

    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.identity == Identity::Guest
    }

    /// The signed-in account, if any.
    #[must_use]
    pub fn user(&self) -> Option<&AccountUser> {
        match &self.identity {
            Identity::Authenticated(user) => Some(user),
            Identity::Unauthenticated | Identity::Guest => None,
        }
    }

    /// Whether the visitor may use the app at all (account or guest).
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.identity != Identity::Unauthenticated
    }

    /// Name to greet the visitor with.
    ///
    /// Account holders get their registered name, falling back to the
    /// email local part. Guests (and the unauthenticated, who only ever
    /// see this transiently) get the mascot name.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.identity {
            Identity::Authenticated(user) => match &user.full_name {
                Some(name) => name.clone(),
                None => email_local_part(&user.email).to_owned(),
            },
            Identity::Guest | Identity::Unauthenticated => GUEST_DISPLAY_NAME.to_owned(),
        }
    }
}

/// Part of an email address before the `@`, or the whole string if it
/// has none.
fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
