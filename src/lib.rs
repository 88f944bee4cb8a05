#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod session;
pub mod store;
pub mod visibility;

pub use app::*;
pub use error::{Error, Result};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
