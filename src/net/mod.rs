//! Network layer: backend configuration, wire DTOs, and REST calls
//! against the hosted identity/data service.

pub mod api;
pub mod config;
pub mod types;
