//! arb-frontend Web Pages
//!
//! Leptos-based WASM frontend for the checkout and payment-return pages.
//! The rest of the site is server-rendered; only these two payment pages
//! run client-side.

mod api;
mod app;
mod config;
mod pages;
mod stripe;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
