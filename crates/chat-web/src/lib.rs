//! simple-chat Web Frontend
//!
//! Leptos-based WASM frontend: one page that sends each typed message to the
//! configured exchange endpoint and shows the replies.

mod api;
mod app;
mod components;
mod logging;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let endpoint_configured = api::remote_exchange().config().endpoint.is_some();
    if endpoint_configured {
        tracing::info!("simple-chat started");
    } else {
        tracing::warn!("CHAT_ENDPOINT_URL was not set at build time; every message will fail");
    }

    leptos::mount::mount_to_body(App);
}
