//! A recording provider double with scriptable responses.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::json;
use serde_json::Value;

use super::detect::ProviderCapabilities;
use super::provider::EventKind;
use super::provider::InjectedProvider;
use super::provider::Listener;
use super::provider::ListenerId;
use super::provider::ProviderError;
use super::provider::ProviderNotification;

/// 1.5 ether in wei.
const DEFAULT_BALANCE: &str = "0x14d1120d7b160000";

struct MockState {
    capabilities: ProviderCapabilities,
    accounts: Vec<String>,
    requestable: Vec<String>,
    balance: String,
    chain_id: u64,
    failures: HashMap<String, ProviderError>,
    calls: Vec<String>,
    listeners: Vec<(EventKind, ListenerId, Rc<Listener>)>,
    next_id: u64,
}

#[derive(Clone)]
pub struct MockProvider(Rc<RefCell<MockState>>);

impl MockProvider {
    fn with_capabilities(capabilities: ProviderCapabilities) -> Self {
        Self(Rc::new(RefCell::new(MockState {
            capabilities,
            accounts: Vec::new(),
            requestable: Vec::new(),
            balance: DEFAULT_BALANCE.to_string(),
            chain_id: 1,
            failures: HashMap::new(),
            calls: Vec::new(),
            listeners: Vec::new(),
            next_id: 0,
        })))
    }

    pub fn metamask() -> Self {
        Self::with_capabilities(ProviderCapabilities::from_flags([("isMetaMask", true)]))
    }

    pub fn coinbase() -> Self {
        Self::with_capabilities(ProviderCapabilities::from_flags([("isCoinbaseWallet", true)]))
    }

    /// A provider that exposes no identifying flags at all.
    pub fn bare() -> Self {
        Self::with_capabilities(ProviderCapabilities::default())
    }

    /// Builder method: accounts already exposed to the page.
    pub fn with_accounts(self, accounts: &[&str]) -> Self {
        self.set_accounts(accounts);
        self
    }

    /// Builder method: accounts granted once the user approves the prompt.
    pub fn with_requestable_accounts(self, accounts: &[&str]) -> Self {
        self.0.borrow_mut().requestable = accounts.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Builder method: make `method` fail with `error`.
    pub fn failing(self, method: &str, error: ProviderError) -> Self {
        self.0
            .borrow_mut()
            .failures
            .insert(method.to_string(), error);
        self
    }

    pub fn set_accounts(&self, accounts: &[&str]) {
        self.0.borrow_mut().accounts = accounts.iter().map(|a| a.to_string()).collect();
    }

    pub fn set_chain_id(&self, chain_id: u64) {
        self.0.borrow_mut().chain_id = chain_id;
    }

    /// All request methods seen so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.0.borrow().calls.clone()
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(k, ..)| *k == kind)
            .count()
    }

    /// Delivers `notification` to every listener of its kind.
    pub fn emit(&self, notification: ProviderNotification) {
        let kind = notification.kind();
        let targets: Vec<Rc<Listener>> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|(k, ..)| *k == kind)
            .map(|(.., l)| l.clone())
            .collect();
        for listener in targets {
            listener(notification.clone());
        }
    }
}

impl InjectedProvider for MockProvider {
    fn capabilities(&self) -> ProviderCapabilities {
        self.0.borrow().capabilities.clone()
    }

    async fn request(&self, method: &str, _params: Value) -> Result<Value, ProviderError> {
        let mut state = self.0.borrow_mut();
        state.calls.push(method.to_string());
        if let Some(error) = state.failures.get(method) {
            return Err(error.clone());
        }
        match method {
            "eth_accounts" => Ok(json!(state.accounts)),
            "eth_requestAccounts" => {
                state.accounts = state.requestable.clone();
                Ok(json!(state.accounts))
            }
            "eth_chainId" => Ok(json!(format!("0x{:x}", state.chain_id))),
            "eth_getBalance" => Ok(json!(state.balance)),
            _ => Err(ProviderError::new(4200, "unsupported method")),
        }
    }

    fn on(&self, kind: EventKind, listener: Listener) -> ListenerId {
        let mut state = self.0.borrow_mut();
        state.next_id += 1;
        let id = ListenerId(state.next_id);
        state.listeners.push((kind, id, Rc::new(listener)));
        id
    }

    fn remove_listener(&self, kind: EventKind, id: ListenerId) {
        self.0
            .borrow_mut()
            .listeners
            .retain(|(k, i, _)| !(*k == kind && *i == id));
    }

    fn remove_all_listeners(&self, kind: EventKind) {
        self.0.borrow_mut().listeners.retain(|(k, ..)| *k != kind);
    }

    fn selected_address(&self) -> Option<String> {
        self.0.borrow().accounts.first().cloned()
    }

    fn chain_id_hint(&self) -> Option<String> {
        Some(format!("0x{:x}", self.0.borrow().chain_id))
    }
}
