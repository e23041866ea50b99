//! Wallet Panel App - Leptos Frontend
//!
//! Builds the controller, wires its event stream into the wallet context and
//! connects once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_wallet::{Controller, WalletConfig};
use std::rc::Rc;

use crate::components::Header;
use crate::pages::PanelPage;
use crate::services::BrowserProvider;
use crate::state::wallet::provide_wallet_context;
use crate::utils::url::{config_from_query, current_search};

#[component]
pub fn App() -> impl IntoView {
    let config = config_from_query(&current_search()).unwrap_or_else(|e| {
        log::warn!("Ignoring wallet configuration from URL: {}", e);
        WalletConfig::default()
    });

    let (events_tx, events_rx) = async_channel::unbounded();
    let controller = Rc::new(Controller::new(BrowserProvider::new(), config).with_events(events_tx));
    let wallet_ctx = provide_wallet_context(controller.clone());

    // Pump controller events into signals for the lifetime of the page
    spawn_local(async move {
        while let Ok(event) = events_rx.recv().await {
            wallet_ctx.apply(event);
        }
    });

    spawn_local(async move {
        let status = controller.connect().await;
        log::info!("Initial connect finished: {}", status);
    });

    view! {
        <div class="app-container">
            <Header/>
            <PanelPage/>
        </div>
    }
}
