//! The wallet adapter: a thin, explicitly constructed service over an injected
//! provider that connects, queries, and forgets a signing context.

use std::cell::RefCell;

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;

use super::error::ConnectionError;
use super::provider::EventKind;
use super::provider::InjectedProvider;
use super::provider::ListenerId;
use super::provider::ProviderNotification;
use crate::chain;
use crate::decimal;

/// What the dashboard knows about the connected account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    /// Native-unit balance as a decimal ether string, e.g. `"1.5"`.
    pub balance: String,
    pub chain_id: u64,
    pub network_name: String,
}

/// A live handle bound to one account.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Signer {
    address: String,
}

/// Wraps an injected provider and exposes connect/disconnect/query/subscribe.
///
/// Interior state is held in a `RefCell` that is never borrowed across an
/// await point, so the adapter can be shared behind an `Rc` by UI tasks.
pub struct WalletAdapter<P: InjectedProvider> {
    provider: Option<P>,
    signer: RefCell<Option<Signer>>,
}

impl<P: InjectedProvider> WalletAdapter<P> {
    /// Creates an adapter for the provider found in the host, if any.
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            signer: RefCell::new(None),
        }
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// True only when a provider exists and identifies itself as MetaMask.
    pub fn is_installed(&self) -> bool {
        self.metamask().is_some()
    }

    /// True while a signing context is cached.
    pub fn is_active(&self) -> bool {
        self.signer.borrow().is_some()
    }

    fn metamask(&self) -> Option<&P> {
        self.provider
            .as_ref()
            .filter(|p| p.capabilities().is_meta_mask)
    }

    /// Connects to the wallet, asking the user for permission if no account is
    /// exposed yet. On success the signing context is cached until
    /// [`WalletAdapter::disconnect`].
    pub async fn connect(&self) -> Result<WalletInfo, ConnectionError> {
        let provider = self.metamask().ok_or(ConnectionError::NotInstalled)?;
        info!("connecting to MetaMask");

        // an unreachable or locked provider fails this probe
        if let Err(e) = provider.request("eth_chainId", json!([])).await {
            warn!("provider probe failed: {e}");
            return Err(ConnectionError::Locked);
        }

        let exposed = accounts(provider, "eth_accounts").await?;
        let address = match exposed.into_iter().next() {
            Some(address) => address,
            None => accounts(provider, "eth_requestAccounts")
                .await?
                .into_iter()
                .next()
                .ok_or(ConnectionError::Locked)?,
        };

        let wallet_info = query_info(provider, &address).await?;
        *self.signer.borrow_mut() = Some(Signer { address });

        info!(
            "connected {} on chain {}",
            wallet_info.address, wallet_info.chain_id
        );
        Ok(wallet_info)
    }

    /// Queries address, balance and chain from the cached signing context.
    ///
    /// Returns `None` if nothing is connected or the provider fails to answer.
    pub async fn get_wallet_info(&self) -> Option<WalletInfo> {
        let signer = self.signer.borrow().clone()?;
        let provider = self.provider.as_ref()?;
        match query_info(provider, &signer.address).await {
            Ok(wallet_info) => Some(wallet_info),
            Err(e) => {
                warn!("error getting wallet info: {e}");
                None
            }
        }
    }

    /// Forgets the signing context. Idempotent; the provider has no
    /// disconnect primitive, so nothing is sent to it.
    pub fn disconnect(&self) {
        if self.signer.borrow_mut().take().is_some() {
            debug!("signing context dropped");
        }
    }

    /// Rebinds the signing context to `address`. Returns false when there is
    /// no active context to rebind.
    pub fn switch_account(&self, address: &str) -> bool {
        match self.signer.borrow_mut().as_mut() {
            Some(signer) => {
                signer.address = address.to_string();
                true
            }
            None => false,
        }
    }

    /// Registers `callback` for account list changes.
    ///
    /// Returns `None` when MetaMask is not installed.
    pub fn on_accounts_changed(
        &self,
        callback: impl Fn(Vec<String>) + 'static,
    ) -> Option<Subscription<P>> {
        self.subscribe(EventKind::AccountsChanged, move |n| {
            if let ProviderNotification::AccountsChanged(accounts) = n {
                callback(accounts);
            }
        })
    }

    /// Registers `callback` for chain changes; it receives the hex chain id.
    pub fn on_chain_changed(
        &self,
        callback: impl Fn(String) + 'static,
    ) -> Option<Subscription<P>> {
        self.subscribe(EventKind::ChainChanged, move |n| {
            if let ProviderNotification::ChainChanged(chain_id) = n {
                callback(chain_id);
            }
        })
    }

    /// Registers `listener` for `kind` directly on the provider's emitter.
    pub fn subscribe(
        &self,
        kind: EventKind,
        listener: impl Fn(ProviderNotification) + 'static,
    ) -> Option<Subscription<P>> {
        let provider = self.metamask()?.clone();
        let id = provider.on(kind, Box::new(listener));
        Some(Subscription {
            provider,
            kind,
            id: Some(id),
        })
    }

    /// Detaches every `accountsChanged` and `chainChanged` listener on the
    /// provider, including those not registered through this adapter.
    pub fn remove_listeners(&self) {
        if let Some(provider) = self.metamask() {
            provider.remove_all_listeners(EventKind::AccountsChanged);
            provider.remove_all_listeners(EventKind::ChainChanged);
        }
    }
}

/// Owns one listener registration. Detaches it when unsubscribed or dropped.
pub struct Subscription<P: InjectedProvider> {
    provider: P,
    kind: EventKind,
    id: Option<ListenerId>,
}

impl<P: InjectedProvider> Subscription<P> {
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(id) = self.id.take() {
            self.provider.remove_listener(self.kind, id);
        }
    }
}

impl<P: InjectedProvider> Drop for Subscription<P> {
    fn drop(&mut self) {
        self.detach();
    }
}

async fn accounts<P: InjectedProvider>(
    provider: &P,
    method: &str,
) -> Result<Vec<String>, ConnectionError> {
    let value = provider.request(method, json!([])).await?;
    serde_json::from_value(value)
        .map_err(|e| ConnectionError::Unknown(format!("unexpected {method} response: {e}")))
}

async fn query_info<P: InjectedProvider>(
    provider: &P,
    address: &str,
) -> Result<WalletInfo, ConnectionError> {
    let balance = provider
        .request("eth_getBalance", json!([address, "latest"]))
        .await?;
    let chain_id = provider.request("eth_chainId", json!([])).await?;

    let wei = decimal::parse_quantity(as_str(&balance))
        .map_err(|e| ConnectionError::Unknown(e.to_string()))?;
    let chain_id = decimal::parse_quantity_u64(as_str(&chain_id))
        .map_err(|e| ConnectionError::Unknown(e.to_string()))?;

    Ok(WalletInfo {
        address: address.to_string(),
        balance: decimal::format_ether(&wei),
        chain_id,
        network_name: chain::network_name(chain_id).to_string(),
    })
}

fn as_str(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}
