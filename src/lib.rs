//! Marquesa Express - landing site
//!
//! Spanish-language marketing page for a bakery info-product business,
//! built with Leptos: rendered on the server with axum and hydrated in the
//! browser, where scroll reveals, hover lifts and entrance timelines run on
//! the Web Animations API.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
