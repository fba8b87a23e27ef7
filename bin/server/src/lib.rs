//! signpost web server and UI.
//!
//! This crate provides the Leptos-based web interface: the application
//! shell, its two pages, and the server configuration that chooses how
//! routes appear in the browser URL.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
pub mod pages;

/// Attribute on `<body>` carrying the history mode from server to client.
pub const ROUTER_MODE_ATTRIBUTE: &str = "data-router-mode";

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;
    use signpost_routing::{HistoryMode, RouterConfig};

    console_error_panic_hook::set_once();

    let mode = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .and_then(|body| body.get_attribute(ROUTER_MODE_ATTRIBUTE))
        .and_then(|value| value.parse::<HistoryMode>().ok())
        .unwrap_or_default();
    let config = RouterConfig::new(mode);

    leptos::mount::hydrate_body(move || view! { <App config=config.clone()/> });
}
