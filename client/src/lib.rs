//! # client
//!
//! Leptos + WASM frontend for the document question-answering assistant.
//!
//! This crate contains the chat page, its components, the conversation and
//! upload state machines, and the HTTP helpers for the chat backend and the
//! same-origin upload proxy. The `server` crate renders it with SSR and
//! hosts the proxy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
