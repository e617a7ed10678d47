//! # client
//!
//! Leptos + WASM frontend for the OnceHuman toolset.
//!
//! This crate contains the REST API client, the reusable hologram-styled
//! component barrel, the route table with its title/scroll guard, the tool
//! views, and the toast notification state. The probability math lives
//! behind the `/api/v1` backend; this crate only collects inputs and renders
//! results.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entrypoint: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
