// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Current time as an RFC 3339 timestamp with millisecond precision.
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use wasm_bindgen_futures::JsFuture;
    use web_sys::Window;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    /// Opens `url` in a new browser tab.
    pub fn open_url(url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                dioxus_logger::tracing::warn!("could not open {url}: {e:?}");
            }
        }
    }

    pub fn user_agent() -> String {
        web_sys::window()
            .and_then(|win| win.navigator().user_agent().ok())
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// There is no clipboard to write to outside the browser.
    pub async fn clipboard_set(_text: String) -> bool {
        false
    }

    pub fn open_url(url: &str) {
        dioxus_logger::tracing::info!("open {url}");
    }

    pub fn user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
