//! Auth operation failures surfaced to the entry screen.

use thiserror::Error;

/// Failure of an interactive sign-in or registration attempt.
///
/// Display strings are shown directly in the entry form, so backend
/// rejection messages pass through while connectivity problems get a
/// generic wording.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend rejected the credentials.
    #[error("{0}")]
    InvalidCredentials(String),
    /// The backend refused the registration.
    #[error("{0}")]
    RegistrationFailed(String),
    /// The backend could not be reached or gave no usable answer.
    #[error("falha de conexão: {0}")]
    Network(String),
}
