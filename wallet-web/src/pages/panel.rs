//! Wallet Panel Page
//!
//! Account, balances, network and asset selection, and the transfer form.
//! Every action goes through the controller; the view only reads signals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::ev::{Event, MouseEvent};
use lib_wallet::{ControllerStatus, TransferRequest};
use shared::{short_address, Asset, Network};

use crate::state::wallet::use_wallet_context;
use crate::utils::format::{format_balance, format_tx_hash};

#[component]
pub fn PanelPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let config = wallet_ctx.config();
    let status = wallet_ctx.status;
    let session = wallet_ctx.session;
    let notice = wallet_ctx.notice;

    let (amount, set_amount) = signal(String::new());
    let (recipient, set_recipient) = signal(String::new());

    let on_connect = move |_: MouseEvent| {
        let controller = wallet_ctx.controller();
        spawn_local(async move {
            let status = controller.connect().await;
            log::info!("Connect finished: {}", status);
        });
    };

    let on_network = move |ev: Event| {
        let network = match event_target_value(&ev).parse::<Network>() {
            Ok(network) => network,
            Err(e) => {
                log::warn!("Ignoring network selection: {}", e);
                return;
            }
        };
        let controller = wallet_ctx.controller();
        spawn_local(async move {
            if let Err(e) = controller.change_network(network).await {
                log::warn!("Provider did not switch to {}: {}", network, e);
            }
        });
    };

    let on_asset = move |ev: Event| match event_target_value(&ev).parse::<Asset>() {
        Ok(asset) => {
            wallet_ctx.controller().select_asset(asset);
        }
        Err(e) => log::warn!("Ignoring asset selection: {}", e),
    };

    let on_submit = move |_: MouseEvent| {
        let request = TransferRequest::new(
            recipient.get_untracked(),
            amount.get_untracked(),
            session.with_untracked(|s| s.selected_asset()),
        );
        let controller = wallet_ctx.controller();
        notice.set(None);
        spawn_local(async move {
            match controller.submit(request).await {
                Ok(receipt) => {
                    notice.set(Some(format!("Transaction sent: {}", format_tx_hash(&receipt.hash_hex()))))
                }
                Err(e) => notice.set(Some(e.to_string())),
            }
        });
    };

    let account = move || {
        session.with(|s| s.account().map(short_address).unwrap_or_else(|| "Not connected".to_string()))
    };

    let primary_symbol = config.primary_symbol.clone();
    let secondary_symbol = config.secondary_symbol.clone();
    let primary_balance = move || session.with(|s| format_balance(s.balance(Asset::Primary), &primary_symbol));
    let secondary_balance = move || session.with(|s| format_balance(s.balance(Asset::Secondary), &secondary_symbol));

    let network_options = Network::ALL
        .into_iter()
        .map(|network| view! { <option value=network.as_str()>{network.label()}</option> })
        .collect_view();

    let asset_options = Asset::ALL
        .into_iter()
        .map(|asset| {
            let symbol = config.symbol(asset).to_string();
            view! { <option value=asset.as_str()>{symbol}</option> }
        })
        .collect_view();

    view! {
        <div class="card" style="max-width: 720px; margin: 24px auto;">
            <section class="account">
                <p class="label">"Account"</p>
                <p class="address">{account}</p>
                <p class="balance">{primary_balance}</p>
                <p class="balance">{secondary_balance}</p>
                <Show when=move || status.with(|s| s.can_connect())>
                    <button class="btn" on:click=on_connect>"Connect wallet"</button>
                </Show>
                <Show when=move || status.with(|s| s.is_failed())>
                    <p class="error">{move || status.with(|s| s.to_string())}</p>
                </Show>
            </section>

            <section class="transfer">
                <label>
                    "Network"
                    <select
                        on:change=on_network
                        prop:value=move || session.with(|s| s.network().as_str())
                    >
                        {network_options}
                    </select>
                </label>

                <label>
                    "Asset"
                    <select
                        on:change=on_asset
                        prop:value=move || session.with(|s| s.selected_asset().as_str())
                        disabled=move || session.with(|s| s.transfer_locked())
                    >
                        {asset_options}
                    </select>
                </label>

                <label>
                    "Amount"
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="0.0"
                        prop:value=amount
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Recipient"
                    <input
                        type="text"
                        placeholder="0x…"
                        prop:value=recipient
                        on:input=move |ev| set_recipient.set(event_target_value(&ev))
                    />
                </label>

                <button
                    class="btn"
                    on:click=on_submit
                    disabled=move || !status.with(|s| s.is_ready())
                >
                    {move || if status.with(|s| *s == ControllerStatus::Submitting) { "Sending…" } else { "Send" }}
                </button>

                {move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}
            </section>
        </div>
    }
}
