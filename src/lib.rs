//! # curhatin-client
//!
//! Leptos + WASM front end for the Curhatin confessions board. Replaces the
//! server-rendered page's imperative script with a Rust-native UI layer: the
//! paginated story feed, the story-detail page with comments, navbar chrome
//! (dropdowns, mobile search, theme toggle), and flash messages.
//!
//! This crate contains pages, components, application state, network types,
//! and REST helpers for the board's JSON/form endpoints. Auth, posting, and
//! search stay on the server-rendered pages of the host application.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hook up logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
