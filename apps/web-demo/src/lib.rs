//! Demo page: a horizontal strip of items panned by dragging.
//!
//! Build with `wasm-pack build apps/web-demo --target web` and open
//! `index.html` from this directory.

#![cfg(target_arch = "wasm32")]

use glide_app::AppLauncher;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    AppLauncher::new()
        .with_target("scrollable")
        .with_container("items")
        .with_inertia(0.95)
        .mount()?
        .forget();
    Ok(())
}
