use std::time::Duration;

use api::wallet::session::ToastKind;
use dioxus::prelude::*;

use crate::compat;
use crate::hooks::use_wallet;

const TOAST_DURATION: Duration = Duration::from_secs(5);

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast success",
        ToastKind::Error => "toast error",
        ToastKind::Warning => "toast warning",
        ToastKind::Info => "toast info",
    }
}

/// Shows the latest notice and hides it again after a few seconds.
#[component]
pub fn Toast() -> Element {
    let mut toast = use_wallet().toast;

    use_effect(move || {
        if let Some(current) = toast() {
            spawn(async move {
                compat::sleep(TOAST_DURATION).await;
                // a newer notice keeps its own timer
                if toast.peek().as_ref() == Some(&current) {
                    toast.set(None);
                }
            });
        }
    });

    match toast() {
        Some(current) => rsx! {
            div {
                class: kind_class(current.kind),
                role: "status",
                span { "{current.message}" }
                a {
                    href: "#",
                    "aria-label": "Close",
                    onclick: move |evt| {
                        evt.prevent_default();
                        toast.set(None);
                    },
                    "✕"
                }
            }
        },
        None => rsx! {},
    }
}
