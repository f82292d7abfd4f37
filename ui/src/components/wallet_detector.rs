use dioxus::prelude::*;

use crate::injected;

/// Warns when several wallet extensions compete for the page's provider.
#[component]
pub fn WalletDetector() -> Element {
    let wallets = use_hook(injected::detect_host_wallets);
    let mut dismissed = use_signal(|| false);

    if dismissed() || !wallets.has_conflict() {
        return rsx! {};
    }

    let detected = wallets.detected();
    let (recommended, others): (Vec<_>, Vec<_>) =
        detected.into_iter().partition(|w| w.is_meta_mask);

    rsx! {
        aside {
            class: "wallet-warning",
            article {
                class: "notice warning",
                header {
                    class: "panel-header",
                    strong { "Multiple Wallets Detected" }
                    a {
                        href: "#",
                        "aria-label": "Close",
                        class: "close",
                        onclick: move |evt| {
                            evt.prevent_default();
                            dismissed.set(true);
                        },
                        "✕"
                    }
                }
                p {
                    "We detected multiple wallet extensions. For the best experience, we recommend using MetaMask."
                }
                ul {
                    for wallet in recommended {
                        li { class: "positive", "✓ {wallet.name} (Recommended)" }
                    }
                    for wallet in others {
                        li { "⚠ {wallet.name}" }
                    }
                }
                small {
                    p { "• Disable other wallet extensions if you experience connection issues" }
                    p { "• Ensure MetaMask is unlocked and on the correct network" }
                }
            }
        }
    }
}
