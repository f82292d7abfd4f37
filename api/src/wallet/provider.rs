//! The contract an injected (EIP-1193) wallet provider has to fulfil.

use serde_json::Value;
use thiserror::Error;

use super::detect::ProviderCapabilities;

/// EIP-1193 code for "the user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// An error returned by the provider for a `request` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (code {code})")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The two provider events the dashboard listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
pub enum EventKind {
    #[strum(serialize = "accountsChanged")]
    AccountsChanged,
    #[strum(serialize = "chainChanged")]
    ChainChanged,
}

impl EventKind {
    /// The event name used on the provider's emitter.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// A decoded provider event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderNotification {
    /// The list of exposed accounts changed; empty means the user disconnected.
    AccountsChanged(Vec<String>),
    /// The active chain changed. Carries the hex chain id.
    ChainChanged(String),
}

impl ProviderNotification {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::AccountsChanged(_) => EventKind::AccountsChanged,
            Self::ChainChanged(_) => EventKind::ChainChanged,
        }
    }

    /// Decodes a raw event payload. Payloads of the wrong shape decode to an
    /// empty account list / empty chain id rather than failing.
    pub fn decode(kind: EventKind, payload: &Value) -> Self {
        match kind {
            EventKind::AccountsChanged => Self::AccountsChanged(
                payload
                    .as_array()
                    .map(|accounts| {
                        accounts
                            .iter()
                            .filter_map(|a| a.as_str().map(str::to_owned))
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
            EventKind::ChainChanged => {
                Self::ChainChanged(payload.as_str().unwrap_or_default().to_owned())
            }
        }
    }
}

/// Identifies one registered listener on a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// A callback registered on the provider's event emitter.
pub type Listener = Box<dyn Fn(ProviderNotification)>;

/// A wallet provider injected into the host environment by a browser extension.
///
/// Implementations are cheap handles: cloning one yields another handle to the
/// same underlying provider. Futures are not `Send`; providers live on the
/// single browser thread.
#[allow(async_fn_in_trait)]
pub trait InjectedProvider: Clone + 'static {
    /// Reads the provider's self-identifying flags.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Sends a JSON-RPC request and waits for the provider to resolve it.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Registers `listener` for `kind`. Events are delivered in emission order.
    fn on(&self, kind: EventKind, listener: Listener) -> ListenerId;

    /// Detaches one listener previously returned by [`InjectedProvider::on`].
    fn remove_listener(&self, kind: EventKind, id: ListenerId);

    /// Detaches every listener of `kind`, including ones registered elsewhere.
    fn remove_all_listeners(&self, kind: EventKind);

    /// The account the provider currently exposes, if it reports one.
    fn selected_address(&self) -> Option<String> {
        None
    }

    /// The hex chain id the provider caches, if it reports one.
    fn chain_id_hint(&self) -> Option<String> {
        None
    }

    /// Whether the provider reports a live connection to its node.
    fn is_connected(&self) -> bool {
        false
    }
}

/// A provider type that can never exist. Used on hosts that have no
/// extension injection at all.
#[derive(Clone, Copy, Debug)]
pub enum NoProvider {}

impl InjectedProvider for NoProvider {
    fn capabilities(&self) -> ProviderCapabilities {
        match *self {}
    }

    async fn request(&self, _method: &str, _params: Value) -> Result<Value, ProviderError> {
        match *self {}
    }

    fn on(&self, _kind: EventKind, _listener: Listener) -> ListenerId {
        match *self {}
    }

    fn remove_listener(&self, _kind: EventKind, _id: ListenerId) {
        match *self {}
    }

    fn remove_all_listeners(&self, _kind: EventKind) {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_names_match_the_emitter() {
        assert_eq!(EventKind::AccountsChanged.name(), "accountsChanged");
        assert_eq!(EventKind::ChainChanged.name(), "chainChanged");
    }

    #[test]
    fn decodes_payloads() {
        assert_eq!(
            ProviderNotification::decode(EventKind::AccountsChanged, &json!(["0xabc", 7])),
            ProviderNotification::AccountsChanged(vec!["0xabc".to_string()])
        );
        assert_eq!(
            ProviderNotification::decode(EventKind::AccountsChanged, &json!(null)),
            ProviderNotification::AccountsChanged(vec![])
        );
        assert_eq!(
            ProviderNotification::decode(EventKind::ChainChanged, &json!("0x89")),
            ProviderNotification::ChainChanged("0x89".to_string())
        );
    }
}
