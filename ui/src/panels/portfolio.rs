use api::market;
use dioxus::prelude::*;

use crate::components::pico::Panel;

#[component]
pub fn PortfolioPanel() -> Element {
    let holdings = use_hook(market::holdings);
    let total = market::portfolio_value(&holdings);

    rsx! {
        Panel {
            title: "Portfolio",
            small { class: "muted", "Total Portfolio Value" }
            h3 { "${total.to_locale_string()}" }
            for holding in holdings {
                div {
                    class: "row",
                    div {
                        strong { "{holding.symbol}" }
                        br {}
                        small { class: "muted", "{holding.amount} {holding.symbol}" }
                    }
                    div {
                        class: "right",
                        "${holding.value.to_locale_string()}"
                        br {}
                        small {
                            class: if holding.is_positive { "positive" } else { "negative" },
                            "{holding.change}"
                        }
                    }
                }
            }
        }
    }
}
