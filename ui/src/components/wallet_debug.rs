use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::components::pico::Accordion;
use crate::hooks::use_wallet;

fn mark(on: bool) -> &'static str {
    if on {
        "✅"
    } else {
        "❌"
    }
}

/// Provider diagnostics, re-read whenever the provider emits an event.
#[component]
pub fn WalletDebug() -> Element {
    let wallet = use_wallet();
    let revision = wallet.revision;
    let snapshot = use_memo(move || {
        let _ = revision();
        wallet.debug_snapshot()
    });
    let mut logged = use_signal(|| false);

    let s = snapshot();
    let address = s.selected_address.clone().unwrap_or_else(|| "None".into());
    let chain_id = s.chain_id.clone().unwrap_or_else(|| "None".into());
    let cardano_name = s.cardano_name.clone().unwrap_or_else(|| "None".into());

    rsx! {
        aside {
            class: "wallet-debug",
            Accordion {
                title: "Wallet Debug".to_string(),
                h6 { "Ethereum Provider" }
                ul {
                    li { "Exists: {mark(s.ethereum_exists)}" }
                    li { "MetaMask: {mark(s.capabilities.is_meta_mask)}" }
                    li { "Connected: {mark(s.is_connected)}" }
                    li { "Address: {address}" }
                    li { "Chain ID: {chain_id}" }
                }
                h6 { "Other Wallets" }
                ul {
                    if s.other_wallets.is_empty() {
                        li { "None detected" }
                    }
                    for flag in s.other_wallets.iter() {
                        li { "⚠️ {flag}" }
                    }
                }
                h6 { "Cardano" }
                ul {
                    li { "Exists: {mark(s.cardano_exists)}" }
                    li { "Name: {cardano_name}" }
                }
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        let snapshot = snapshot();
                        match serde_json::to_string_pretty(&snapshot) {
                            Ok(json) => info!("Wallet Debug Info: {json}"),
                            Err(e) => info!("Wallet Debug Info: {snapshot:?} ({e})"),
                        }
                        logged.set(true);
                    },
                    if logged() { "Debug info logged to console" } else { "Log to Console" }
                }
            }
        }
    }
}
