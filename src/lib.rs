#![recursion_limit = "512"]
// lib.rs - Root module for the catalogo_produtos library
//
// The web_app module holds the whole application; this crate builds both
// as the server binary (ssr) and the WASM hydration bundle (hydrate).

pub mod web_app;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
