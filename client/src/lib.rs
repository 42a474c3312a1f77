//! # smartspend-client
//!
//! Leptos + WASM frontend for the SmartSpend warranty tracker.
//!
//! This crate contains the session context, REST calls and wire types, the
//! login/register, home and profile pages, and the warranty detail modal.
//! The `server` crate renders it with the `ssr` feature; the browser bundle
//! is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let level = config::ClientConfig::from_build_env().map_or(log::Level::Info, |cfg| cfg.log_level);
    let _ = console_log::init_with_level(level);

    leptos::mount::hydrate_body(app::App);
}
