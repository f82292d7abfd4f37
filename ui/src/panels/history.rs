use api::market;
use api::market::TxRecord;
use dioxus::prelude::*;

use crate::components::pico::Panel;

#[component]
fn HistoryRow(tx: TxRecord) -> Element {
    let (arrow, side_class) = if tx.side.is_buy() {
        ("↙", "positive")
    } else {
        ("↗", "negative")
    };
    let status_class = if tx.status.is_completed() {
        "badge positive"
    } else {
        "badge warning"
    };

    rsx! {
        div {
            class: "row",
            div {
                strong { class: side_class, "{arrow} " }
                strong { "{tx.side} {tx.symbol}" }
                br {}
                small { class: "muted", "{tx.time}" }
            }
            div {
                class: "right",
                "{tx.amount} @ ${tx.price.to_locale_string()}"
                br {}
                small { class: "muted", "Total: ${tx.total.to_locale_string()}" }
                br {}
                mark { class: status_class, "{tx.status.label()}" }
            }
        }
    }
}

#[component]
pub fn HistoryPanel() -> Element {
    let transactions = use_hook(market::transactions);

    rsx! {
        Panel {
            title: "Transaction History",
            for tx in transactions {
                HistoryRow { key: "{tx.id}", tx }
            }
        }
    }
}
