//! # buildlaunch-client
//!
//! Leptos + WASM frontend for the Build Launch renovation marketplace.
//! Replaces the React `frontend/` with a Rust-native UI layer.
//!
//! The interesting part is the session machinery: `state::auth` owns the
//! auth lifecycle, `util::token_store` persists the token, `net` wraps the
//! REST API with a typed error taxonomy, and `state::guard` plus
//! `components::protected` gate the role-restricted routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
