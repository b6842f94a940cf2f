//! # linkdeck-client
//!
//! Leptos front end for the URL shortener.
//!
//! ARCHITECTURE
//! ============
//! Pages hold the core view-models (`linkdeck::pages`) in signals and render
//! their typed state through components. Network calls run in `spawn_local`
//! tasks using the begin/finish split of each view-model, so no signal is
//! borrowed across an await. Browser glue (localStorage, clipboard, timers,
//! the wasm entry point) is compiled only with the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
