//! # attendance-client
//!
//! Leptos + WASM front end for the employee attendance/leave application.
//! Talks to the attendance REST backend over HTTP; the session credential
//! lives in browser `localStorage` and is attached to every request.
//!
//! This crate contains pages, components, the session store, the route
//! table with its guard, and the REST transport with its authorization
//! policy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: set up logging, then hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
