//! Persisted session token storage.
//!
//! Stores the backend bearer token in `localStorage` so a signed-in
//! session survives page reloads. Guest mode is intentionally never
//! persisted here; it lives only in reactive state for the current tab.
//!
//! TRADE-OFFS
//! ==========
//! Token persistence is best-effort browser-only behavior; SSR and
//! native-test paths safely no-op so rendering stays deterministic.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "puff_session_token";

/// Read the persisted session token, if any.
#[must_use]
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a session token for future page loads.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove any persisted session token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// Read and remove the persisted token in one step.
///
/// Used on sign-out, where the caller still needs the token for the
/// remote termination call after local state has been cleared.
#[must_use]
pub fn take_token() -> Option<String> {
    let token = read_token();
    clear_token();
    token
}
