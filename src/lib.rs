//! # catalog-ui
//!
//! Leptos frontend for the API Catalog. Renders the catalog header (dashboard
//! link + logout control) inside an `App` shell that owns the auth session.
//!
//! The same crate is compiled natively with `ssr` for the server and to WASM
//! with `hydrate` for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// WASM entry point: attach the `App` to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
