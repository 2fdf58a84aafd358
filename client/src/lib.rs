//! # client
//!
//! Leptos + WASM frontend for the social/admin application.
//!
//! This crate contains pages, components, application state, and the REST and
//! identity-provider clients. The `hydrate` feature builds the browser bundle;
//! the `ssr` feature lets the host binary render the initial HTML shell.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
