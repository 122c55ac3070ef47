//! # sigea-client
//!
//! Leptos + WASM front-end for SIGEA, the school-management application.
//! Role-based dashboards (admin, teacher, student, kitchen, library) over a
//! hosted backend platform that provides authentication and the `profiles`
//! table; this crate implements routing, session/identity resolution and the
//! authentication forms.
//!
//! The crate contains pages, components, application state, the REST
//! bindings and the session client task. Everything browser-specific sits
//! behind the `csr` feature so the state machines and parsers test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the trunk build.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
