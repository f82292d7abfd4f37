// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
pub mod injected;
mod panels;

use api::prefs::UserPrefs;
use app_state::AppState;
use components::header::Header;
use components::install_notice::InstallNotice;
use components::pico::Container;
use components::toast::Toast;
use components::wallet_debug::WalletDebug;
use components::wallet_detector::WalletDetector;
use hooks::use_wallet_provider;
use panels::history::HistoryPanel;
use panels::market_overview::MarketOverviewPanel;
use panels::order_book::OrderBookPanel;
use panels::portfolio::PortfolioPanel;
use panels::trade_form::TradeFormPanel;
use panels::wallet_info::WalletInfoPanel;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = r#"
    :root { --positive: #4ade80; --negative: #f87171; --warning: #facc15; }

    /* --- LAYOUT --- */
    .dashboard {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
        margin-top: 1.5rem;
    }
    @media (min-width: 1024px) {
        .dashboard { grid-template-columns: 3fr 6fr 3fr; }
    }
    .dashboard > div > article { margin-bottom: 1.5rem; }

    /* --- PANELS --- */
    .panel-header { display: flex; justify-content: space-between; align-items: center; }
    .row { display: flex; justify-content: space-between; align-items: center; padding: 0.5rem 0; border-bottom: 1px solid var(--pico-muted-border-color); }
    .row:last-child { border-bottom: none; }
    .right { text-align: right; }
    .muted { color: var(--pico-muted-color); }
    .positive { color: var(--positive); }
    .negative { color: var(--negative); }
    .warning { color: var(--warning); }
    .side-toggle { margin-bottom: 1rem; }
    .quote td:last-child { text-align: right; }
    .book td, .book th { padding: 0.25rem 0.5rem; }
    .mid-price { text-align: center; margin: 1rem 0; }
    .mid-price h3 { margin-bottom: 0; }
    .address { display: block; word-break: break-all; }
    .dot { display: inline-block; width: 0.5rem; height: 0.5rem; border-radius: 50%; margin-right: 0.5rem; background-color: var(--positive); }
    .pulse { animation: pulse 2s infinite; }
    @keyframes pulse { 50% { opacity: 0.4; } }
    .badge { font-size: 0.75rem; padding: 0.1rem 0.5rem; border-radius: 0.25rem; }

    /* --- BUTTON COLOURS --- */
    button.positive { --pico-background-color: #16a34a; --pico-border-color: #16a34a; color: #fff; }
    button.negative { --pico-background-color: #dc2626; --pico-border-color: #dc2626; color: #fff; }
    button.outline.positive, button.outline.negative { --pico-background-color: transparent; color: var(--pico-muted-color); }
    .copy-button { padding: 0.1rem 0.5rem; }

    /* --- NOTICES --- */
    .notice.warning { border: 1px solid var(--warning); }
    .wallet-warning { position: fixed; top: 1rem; left: 1rem; right: 1rem; z-index: 50; }
    .wallet-debug { position: fixed; bottom: 1rem; right: 1rem; z-index: 50; max-width: 28rem; font-size: 0.8rem; }
    .toast { position: fixed; top: 1rem; right: 1rem; z-index: 60; display: flex; gap: 1rem; padding: 0.75rem 1rem; border-radius: var(--pico-border-radius); background: var(--pico-card-background-color); box-shadow: var(--pico-card-box-shadow); }
    .toast.success { border-left: 4px solid var(--positive); }
    .toast.error { border-left: 4px solid var(--negative); }
    .toast.warning { border-left: 4px solid var(--warning); }
    .toast.info { border-left: 4px solid var(--pico-primary); }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{dashboard_css}"
        }
        LoadedApp {
            app_state: AppState::new(UserPrefs::from_env()),
        }
    }
}

/// This component holds the main app logic.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    let app_state = use_context_provider(|| app_state.clone());
    use_hook(|| info!("prefs: {:#?}", app_state.prefs));

    use_wallet_provider();

    rsx! {
        WalletDetector {}
        Header {}
        Container {
            InstallNotice {}
            div {
                class: "dashboard",
                div {
                    TradeFormPanel {}
                }
                div {
                    MarketOverviewPanel {}
                    OrderBookPanel {}
                }
                div {
                    WalletInfoPanel {}
                    PortfolioPanel {}
                    HistoryPanel {}
                }
            }
        }
        if app_state.prefs.show_wallet_debug() {
            WalletDebug {}
        }
        Toast {}
    }
}
