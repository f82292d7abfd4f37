use dioxus::prelude::*;

use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_wallet;

const METAMASK_DOWNLOAD_URL: &str = "https://metamask.io/download/";

/// Explains how to get MetaMask. Shown while disconnected with an error.
#[component]
pub fn InstallNotice() -> Element {
    let status = use_wallet().status();
    if status.is_connected || status.error.is_none() {
        return rsx! {};
    }

    rsx! {
        article {
            class: "notice warning",
            h4 { "MetaMask Required" }
            p {
                "To use this trading platform, you need to install MetaMask wallet extension. "
                "MetaMask is a secure wallet for accessing Ethereum-based applications."
            }
            strong { "Installation Steps:" }
            ol {
                li { "Visit the official MetaMask website" }
                li { "Click \"Download\" and install the extension" }
                li { "Create a new wallet or import existing one" }
                li { "Connect your wallet to this application" }
            }
            Button {
                button_type: ButtonType::Contrast,
                on_click: move |_| compat::open_url(METAMASK_DOWNLOAD_URL),
                "Install MetaMask"
            }
        }
    }
}
