//! # portal
//!
//! Leptos + WASM front end whose router gates every path on the visitor's
//! auth state: public pages for anonymous visitors, protected pages for
//! signed-in users, and redirects in between.
//!
//! The gate itself lives in `routing` as plain functions over a route
//! table; `app` wires it into the Leptos router.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
