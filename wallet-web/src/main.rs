//! Wallet Panel - Leptos Frontend
//!
//! Browser shell around `lib-wallet`: binds `window.ethereum`, mounts the panel
//! and mirrors controller state into signals. Only `utils` builds off-wasm.

pub mod utils;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod pages;
#[cfg(target_arch = "wasm32")]
mod services;
#[cfg(target_arch = "wasm32")]
mod state;

#[cfg(target_arch = "wasm32")]
mod entry {
    use crate::app::App;
    use leptos::prelude::*;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn main() {
        // Set up panic hook for better error messages in WASM
        console_error_panic_hook::set_once();

        // lib-wallet logs through tracing's `log` feature, so this catches both
        wasm_logger::init(wasm_logger::Config::default());
        log::info!("Wallet panel starting");

        leptos::mount::mount_to_body(|| view! { <App/> });
    }
}
