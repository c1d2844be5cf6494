//! # portal
//!
//! Leptos + WASM frontend shell that gates pages on the signed-in user's
//! session and role, and announces service-worker offline/update events.
//!
//! This crate contains pages, components, application state, collaborator
//! adapters (session endpoint, role table, service worker) and the
//! build-time client configuration.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(all(test, feature = "hydrate"))]
mod test_support;

/// Browser entry point: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
