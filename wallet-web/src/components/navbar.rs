//! Header bar with the connection badge

use leptos::prelude::*;
use lib_wallet::ControllerStatus;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Header() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let badge = move || {
        wallet_ctx.status.with(|status| match status {
            ControllerStatus::Uninitialized => ("badge badge-idle", "Not connected"),
            ControllerStatus::Connecting => ("badge badge-pending", "Connecting…"),
            ControllerStatus::Ready => ("badge badge-ok", "Connected"),
            ControllerStatus::Submitting => ("badge badge-pending", "Awaiting signature"),
            ControllerStatus::Failed(_) => ("badge badge-error", "Connection failed"),
        })
    };

    view! {
        <nav>
            <div style="max-width: 720px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <span class="nav-title">"Wallet Panel"</span>
                <span class=move || badge().0>{move || badge().1}</span>
            </div>
        </nav>
    }
}
