//! Reactive application state shared via Leptos context.

pub mod identity;
