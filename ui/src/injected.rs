//! Access to the wallet provider injected into the page by browser extensions.
//!
//! In the browser this binds `window.ethereum` (EIP-1193) and `window.cardano`.
//! Other targets have no injection, so no provider is ever found there.

use api::wallet::detect::DebugSnapshot;
use api::wallet::InjectedProvider;

use crate::compat;

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Reads the provider diagnostics shown in the wallet debug panel.
pub fn debug_snapshot(provider: Option<&PlatformProvider>) -> DebugSnapshot {
    let wallets = detect_host_wallets();
    let (selected_address, chain_id, is_connected) = match provider {
        Some(p) => (p.selected_address(), p.chain_id_hint(), p.is_connected()),
        None => (None, None, false),
    };
    DebugSnapshot::new(&wallets, selected_address, chain_id, is_connected)
        .with_environment(compat::now_iso8601(), compat::user_agent())
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use api::wallet::detect::CardanoInfo;
    use api::wallet::detect::HostWallets;
    use api::wallet::detect::ProviderCapabilities;
    use api::wallet::provider::EventKind;
    use api::wallet::provider::InjectedProvider;
    use api::wallet::provider::Listener;
    use api::wallet::provider::ListenerId;
    use api::wallet::provider::ProviderError;
    use api::wallet::provider::ProviderNotification;
    use dioxus_logger::tracing::debug;
    use js_sys::Function;
    use js_sys::Object;
    use js_sys::Promise;
    use js_sys::Reflect;
    use js_sys::JSON;
    use serde_json::json;
    use serde_json::Value;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    pub type PlatformProvider = BrowserProvider;

    const KNOWN_FLAGS: [&str; 4] = ["isMetaMask", "isCoinbaseWallet", "isTokenPocket", "isTronLink"];

    /// JSON-RPC "internal error", used when a rejection carries no code.
    const INTERNAL_ERROR: i64 = -32603;

    type JsListener = Closure<dyn Fn(JsValue)>;

    /// Handle to `window.ethereum`.
    ///
    /// Keeps every closure handed to the provider alive until it is removed
    /// again, since JS only holds a borrowed reference to it.
    #[derive(Clone)]
    pub struct BrowserProvider {
        ethereum: JsValue,
        listeners: Rc<RefCell<HashMap<ListenerId, (EventKind, JsListener)>>>,
        next_id: Rc<Cell<u64>>,
    }

    /// Returns the injected ethereum provider, if an extension installed one.
    pub fn find_provider() -> Option<BrowserProvider> {
        let ethereum = property(&js_sys::global(), "ethereum")?;
        Some(BrowserProvider {
            ethereum,
            listeners: Default::default(),
            next_id: Default::default(),
        })
    }

    /// Probes the page for every wallet extension the dashboard knows about.
    pub fn detect_host_wallets() -> HostWallets {
        let ethereum = find_provider().map(|p| p.capabilities());
        let cardano = property(&js_sys::global(), "cardano").map(|cardano| CardanoInfo {
            name: property(&cardano, "name").and_then(|n| n.as_string()),
        });
        HostWallets { ethereum, cardano }
    }

    /// Reads `target[key]`, treating `undefined` and `null` as absent.
    fn property(target: &JsValue, key: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    fn to_json(value: &JsValue) -> Value {
        JSON::stringify(value)
            .ok()
            .and_then(|s| s.as_string())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or(Value::Null)
    }

    fn provider_error(err: JsValue) -> ProviderError {
        let code = property(&err, "code")
            .and_then(|c| c.as_f64())
            .map(|c| c as i64)
            .unwrap_or(INTERNAL_ERROR);
        let message = property(&err, "message")
            .and_then(|m| m.as_string())
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{err:?}"));
        ProviderError::new(code, message)
    }

    impl BrowserProvider {
        fn method(&self, name: &str) -> Result<Function, ProviderError> {
            property(&self.ethereum, name)
                .and_then(|f| f.dyn_into::<Function>().ok())
                .ok_or_else(|| {
                    ProviderError::new(INTERNAL_ERROR, format!("provider has no {name}()"))
                })
        }

        fn flag(&self, name: &str) -> bool {
            property(&self.ethereum, name).is_some_and(|v| v.is_truthy())
        }

        fn emitter_call(&self, name: &str, kind: EventKind, listener: Option<&JsValue>) {
            let result = self.method(name).and_then(|f| {
                let event = JsValue::from_str(kind.name());
                match listener {
                    Some(l) => f.call2(&self.ethereum, &event, l),
                    None => f.call1(&self.ethereum, &event),
                }
                .map_err(provider_error)
            });
            if let Err(e) = result {
                debug!("{name}({}) failed: {e}", kind.name());
            }
        }
    }

    impl InjectedProvider for BrowserProvider {
        fn capabilities(&self) -> ProviderCapabilities {
            let mut flags: Vec<(String, bool)> = KNOWN_FLAGS
                .iter()
                .map(|name| (name.to_string(), self.flag(name)))
                .collect();

            if let Some(object) = self.ethereum.dyn_ref::<Object>() {
                for key in Object::keys(object).iter().filter_map(|k| k.as_string()) {
                    if !key.starts_with("is") || KNOWN_FLAGS.contains(&key.as_str()) {
                        continue;
                    }
                    if let Some(value) = property(&self.ethereum, &key).and_then(|v| v.as_bool()) {
                        flags.push((key, value));
                    }
                }
            }

            ProviderCapabilities::from_flags(flags.iter().map(|(k, v)| (k.as_str(), *v)))
        }

        async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
            let request = self.method("request")?;
            let args = json!({ "method": method, "params": params }).to_string();
            let args = JSON::parse(&args).map_err(provider_error)?;

            let promise: Promise = request
                .call1(&self.ethereum, &args)
                .map_err(provider_error)?
                .dyn_into()
                .map_err(|_| ProviderError::new(INTERNAL_ERROR, "request() returned no promise"))?;

            let result = JsFuture::from(promise).await.map_err(provider_error)?;
            Ok(to_json(&result))
        }

        fn on(&self, kind: EventKind, listener: Listener) -> ListenerId {
            let id = ListenerId(self.next_id.get() + 1);
            self.next_id.set(id.0);

            let closure: JsListener = Closure::new(move |payload: JsValue| {
                listener(ProviderNotification::decode(kind, &to_json(&payload)));
            });
            self.emitter_call("on", kind, Some(closure.as_ref()));
            self.listeners.borrow_mut().insert(id, (kind, closure));
            id
        }

        fn remove_listener(&self, kind: EventKind, id: ListenerId) {
            let removed = self.listeners.borrow_mut().remove(&id);
            if let Some((_, closure)) = removed {
                self.emitter_call("removeListener", kind, Some(closure.as_ref()));
            }
        }

        fn remove_all_listeners(&self, kind: EventKind) {
            self.emitter_call("removeAllListeners", kind, None);
            self.listeners.borrow_mut().retain(|_, (k, _)| *k != kind);
        }

        fn selected_address(&self) -> Option<String> {
            property(&self.ethereum, "selectedAddress").and_then(|v| v.as_string())
        }

        fn chain_id_hint(&self) -> Option<String> {
            property(&self.ethereum, "chainId").and_then(|v| v.as_string())
        }

        fn is_connected(&self) -> bool {
            self.method("isConnected")
                .ok()
                .and_then(|f| f.call0(&self.ethereum).ok())
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::wallet::detect::HostWallets;
    use api::wallet::provider::NoProvider;

    pub type PlatformProvider = NoProvider;

    pub fn find_provider() -> Option<PlatformProvider> {
        None
    }

    pub fn detect_host_wallets() -> HostWallets {
        HostWallets::default()
    }
}
