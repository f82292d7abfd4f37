use api::chain;
use api::decimal::DecimalAmount;
use dioxus::prelude::*;

use crate::components::pico::CopyButton;
use crate::components::pico::Panel;
use crate::hooks::use_wallet;

/// Balance with four decimals, e.g. `1.5000 ETH`.
fn format_balance(balance: &str) -> String {
    match DecimalAmount::parse_non_negative(balance) {
        Ok(amount) => format!("{} ETH", amount.to_fixed(4)),
        Err(_) => format!("{balance} ETH"),
    }
}

#[component]
pub fn WalletInfoPanel() -> Element {
    let status = use_wallet().status();
    let Some(info) = status.wallet_info.filter(|_| status.is_connected) else {
        return rsx! {};
    };

    let accent = chain::network_accent(info.chain_id).css_color();

    rsx! {
        Panel {
            title: "Wallet Info",
            section {
                div {
                    class: "row",
                    small { class: "muted", "Address" }
                    CopyButton { text_to_copy: info.address.clone() }
                }
                code { class: "address", "{info.address}" }
            }
            section {
                small { class: "muted", "Balance" }
                h4 { "{format_balance(&info.balance)}" }
            }
            section {
                small { class: "muted", "Network" }
                p {
                    style: "color: {accent};",
                    span { class: "dot", style: "background-color: {accent};" }
                    "{chain::network_display_name(info.chain_id)}"
                }
                small { class: "muted", "Chain ID: {info.chain_id}" }
            }
            p {
                class: "positive connected-badge",
                span { class: "dot pulse" }
                "Connected"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_has_four_decimals() {
        assert_eq!(format_balance("1.5"), "1.5000 ETH");
        assert_eq!(format_balance("0.123456"), "0.1235 ETH");
        assert_eq!(format_balance("0.0"), "0.0000 ETH");
    }
}
