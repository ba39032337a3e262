//! Backend endpoint configuration resolved at compile time.
//!
//! DESIGN
//! ======
//! The WASM bundle cannot read process environment at runtime, so the
//! backend URL and publishable API key are baked in via `option_env!`.
//! Defaults target a local development stack so the app runs out of the
//! box without any configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_ANON_KEY: &str = "puff-dev-anon-key";

/// Connection settings for the hosted identity/data backend.
#[derive(Clone, Copy, Debug)]
pub struct BackendConfig {
    /// Root URL of the backend (no path suffix).
    pub base_url: &'static str,
    /// Publishable API key sent with every request.
    pub anon_key: &'static str,
}

impl BackendConfig {
    /// Resolve from `PUFF_BACKEND_URL` / `PUFF_BACKEND_ANON_KEY` at build
    /// time, falling back to the local development defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("PUFF_BACKEND_URL").unwrap_or(DEFAULT_BASE_URL),
            anon_key: option_env!("PUFF_BACKEND_ANON_KEY").unwrap_or(DEFAULT_ANON_KEY),
        }
    }

    /// Base URL with any trailing slashes removed so endpoint builders
    /// can join paths unconditionally.
    #[must_use]
    pub fn trimmed_base(&self) -> &'static str {
        self.base_url.trim_end_matches('/')
    }
}
