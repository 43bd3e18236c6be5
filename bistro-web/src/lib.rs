#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod content;
pub mod dom;
pub mod hooks;
pub mod pages;
pub mod paths;
pub mod router;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    log::info!("bistro {} starting", env!("CARGO_PKG_VERSION"));
    yew::Renderer::<app::App>::new().render();
}
