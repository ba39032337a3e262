//! Browser and formatting utilities.

pub mod fmt;
pub mod session_store;
