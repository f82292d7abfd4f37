use api::market;
use api::market::BookLevel;
use dioxus::prelude::*;

use crate::components::pico::Panel;

#[component]
fn BookSide(title: String, class: String, levels: Vec<BookLevel>) -> Element {
    rsx! {
        table {
            class: "book",
            thead {
                tr {
                    th { class: "{class}", colspan: 3, "{title}" }
                }
            }
            tbody {
                for level in levels {
                    tr {
                        td { class: "{class}", "${level.price.to_locale_string()}" }
                        td { "{level.amount}" }
                        td { class: "muted", "${level.total.to_locale_string()}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn OrderBookPanel() -> Element {
    let asks = use_hook(market::asks);
    let bids = use_hook(market::bids);
    let mid = market::MID_PRICE;

    rsx! {
        Panel {
            title: "Order Book",
            BookSide { title: "Sell Orders", class: "negative", levels: asks }
            div {
                class: "mid-price",
                h3 { "{mid.price}" }
                small { class: "positive", "{mid.change}" }
            }
            BookSide { title: "Buy Orders", class: "positive", levels: bids }
        }
    }
}
