use api::decimal::DecimalAmount;
use api::trade::TradeField;
use api::trade::TradeForm;
use api::trade::TradeSide;
use api::trade::BASE_ASSET;
use api::trade::QUOTE_ASSET;
use api::trade::TRADE_PAIR;
use api::wallet::session::Toast;
use api::wallet::session::ToastKind;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use strum::IntoEnumIterator;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Input;
use crate::components::pico::Panel;
use crate::hooks::use_wallet;
use crate::AppState;

fn side_button_type(side: TradeSide) -> ButtonType {
    match side {
        TradeSide::Buy => ButtonType::Positive,
        TradeSide::Sell => ButtonType::Negative,
    }
}

#[component]
pub fn TradeFormPanel() -> Element {
    let fee_bps = use_context::<AppState>().prefs.trade_fee_bps();
    let mut wallet = use_wallet();
    let mut form = use_signal(TradeForm::default);

    let side = form.read().side;
    let fee_percent = DecimalAmount::from_parts(fee_bps, 2);
    let (total, fee) = match form.read().quote(fee_bps) {
        Ok(quote) => (quote.total, quote.fee),
        Err(_) => ("-".to_string(), "-".to_string()),
    };
    let field_error = |field| form.read().field_error(field).map(|e| e.to_string());
    let amount_error = field_error(TradeField::Amount);
    let price_error = field_error(TradeField::Price);

    rsx! {
        Panel {
            title: "Trade",
            note: TRADE_PAIR.to_string(),
            div {
                class: "grid side-toggle",
                for s in TradeSide::iter() {
                    Button {
                        button_type: side_button_type(s),
                        outline: s != side,
                        on_click: move |_| form.write().side = s,
                        "{s}"
                    }
                }
            }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let result = form.peek().submit();
                    match result {
                        Ok(order) => {
                            info!("simulated order: {order:?}");
                            wallet.show_toast(Toast::new(ToastKind::Success, order.to_string()));
                            form.write().reset();
                        }
                        Err(e) => info!("order not placed: {e}"),
                    }
                },
                Input {
                    label: "Amount ({BASE_ASSET})",
                    name: "amount",
                    value: form.read().amount.clone(),
                    placeholder: "0.00",
                    error: amount_error,
                    on_input: move |v: String| form.write().amount = v,
                }
                Input {
                    label: "Price ({QUOTE_ASSET})",
                    name: "price",
                    value: form.read().price.clone(),
                    placeholder: "0.00",
                    error: price_error,
                    on_input: move |v: String| form.write().price = v,
                }
                table {
                    class: "quote",
                    tbody {
                        tr {
                            td { "Total:" }
                            td { "{total} {QUOTE_ASSET}" }
                        }
                        tr {
                            td { "Fee ({fee_percent}%):" }
                            td { "{fee} {QUOTE_ASSET}" }
                        }
                    }
                }
                Button {
                    button_type: side_button_type(side),
                    submit: true,
                    "{side} {BASE_ASSET}"
                }
            }
        }
    }
}
