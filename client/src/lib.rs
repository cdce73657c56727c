//! # campus-client
//!
//! Leptos console for the campus administration back end: staff,
//! departments, students, clubs, and clusters.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). All back-end traffic goes through `campus_api::AdminApi`
//! over the browser transport in [`net`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
