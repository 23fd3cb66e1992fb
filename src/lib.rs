//! Eventra - Event Ticketing Platform
//!
//! A web application for browsing events, selling tickets, and running
//! role-based organizer/admin/staff dashboards, built with Leptos and
//! WebAssembly over an external REST backend.

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
