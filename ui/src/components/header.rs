use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_wallet;

/// Shortens `0x1234567890abcdef...` to `0x1234...cdef`.
pub fn abbreviate_address(address: &str) -> String {
    match (address.get(..6), address.get(address.len().saturating_sub(4)..)) {
        (Some(head), Some(tail)) if address.len() > 10 => format!("{head}...{tail}"),
        _ => address.to_string(),
    }
}

#[component]
pub fn Header() -> Element {
    let wallet = use_wallet();
    let status = wallet.status();

    let (label, button_type) = match &status.wallet_info {
        _ if status.is_loading => ("Connecting...".to_string(), ButtonType::Primary),
        Some(info) => (abbreviate_address(&info.address), ButtonType::Positive),
        None => ("Connect Wallet".to_string(), ButtonType::Primary),
    };

    rsx! {
        header {
            class: "container",
            nav {
                ul {
                    li {
                        span { class: "brand-mark", "↗" }
                    }
                    li {
                        strong { class: "brand", "CryptoTrade" }
                    }
                }
                ul {
                    li {
                        Button {
                            button_type,
                            disabled: status.is_loading,
                            on_click: move |_| {
                                if wallet.status().is_connected {
                                    wallet.disconnect();
                                } else {
                                    wallet.connect();
                                }
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviates_long_addresses_only() {
        assert_eq!(
            abbreviate_address("0x1234567890abcdef1234567890abcdef1234abcd"),
            "0x1234...abcd"
        );
        assert_eq!(abbreviate_address("0x12"), "0x12");
    }
}
