use api::market;
use dioxus::prelude::*;

use crate::components::pico::Panel;

fn trend_class(is_positive: bool) -> &'static str {
    if is_positive {
        "positive"
    } else {
        "negative"
    }
}

#[component]
pub fn MarketOverviewPanel() -> Element {
    let tickers = use_hook(market::tickers);

    rsx! {
        Panel {
            title: "Market Overview",
            for ticker in tickers {
                div {
                    class: "row",
                    div {
                        small { "{ticker.symbol}" }
                        h4 { "${ticker.price.to_locale_string()}" }
                    }
                    div {
                        class: "right",
                        div {
                            class: trend_class(ticker.is_positive),
                            if ticker.is_positive { "▲ " } else { "▼ " }
                            "{ticker.change}"
                        }
                        small { class: "muted", "Vol: {ticker.volume}" }
                    }
                }
            }
        }
    }
}
