//! # client
//!
//! Leptos + WASM frontend for the survey tool: renders survey forms, fetches
//! survey definitions and results from the backend, and posts answers back.
//!
//! This crate contains the router, pages, components, form state, and the
//! browser-side construction of the [`surveys::SurveyService`]. The same code
//! renders on the server (`ssr`) and hydrates in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point.
///
/// The server has already resolved the route and rendered the matching view,
/// so hydration attaches to a settled route tree rather than mounting blind.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
