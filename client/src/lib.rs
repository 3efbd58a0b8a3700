//! # newsroom-client
//!
//! Leptos + WASM frontend for the newsroom site: the lifestyle category grid,
//! the must-read list, the static modern section, post detail pages, and the
//! admin-gated dashboard shell.
//!
//! Posts and admin status come from an external REST backend configured via
//! [`config::ApiConfig`]. Browser-only behavior (HTTP, `localStorage`,
//! alerts) is compiled under the `hydrate` feature; the `ssr` build renders
//! the loading shells that hydration then fills in.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
