//! # client
//!
//! Leptos + WASM frontend for the infection-monitoring dashboard.
//!
//! This crate contains the dashboard page, the floating chat widget, the
//! conversation and window state it drives, the `/api/bot` client, and the
//! CSV export used for tabular replies.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
