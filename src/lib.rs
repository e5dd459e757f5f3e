//! # analytics-ui
//!
//! Leptos + WASM frontend slice of the analytics dashboard: the "Manage
//! Events" page with its event and property usage tables, and the modal used
//! to create a new project.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST helpers that feed them. Views are pure derivations of state
//! snapshots held in context signals; user intents update those signals.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console logging and mounts [`app::App`]
/// into `<body>`. Rendering is client-side only; the host page is a static
/// `index.html` that loads this module.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
