//! PUFF - Plante Um Futuro Feliz.
//!
//! Community web app for planning and tracking urban microforests:
//! project map, personal plantings, a planting guide, community forum,
//! gamified challenges, and environmental impact reporting. Built on
//! Leptos with an axum host for server rendering and a WASM bundle
//! for the client. Identity and data live in a hosted Supabase-style
//! backend reached over REST.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Client entry point: take over the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
