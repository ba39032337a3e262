//! Session lifecycle: identity context, auth operations, and the
//! persisted-session resolution task.

pub mod error;
pub mod provider;
