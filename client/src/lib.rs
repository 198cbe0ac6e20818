//! # travel-client
//!
//! Leptos + WASM single-page shell for the travel booking backend.
//!
//! The crate contains the route table (`routes`), the root component
//! (`app`), one page per route (`pages`) and the shared form component
//! (`components`). All HTTP goes through the `travel-api` crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;

/// Browser entry point: install panic/log hooks and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
