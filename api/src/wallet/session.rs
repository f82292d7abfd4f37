//! Connection state for the dashboard: the adapter plus the user-visible
//! status derived from connect/disconnect and provider notifications.

use std::cell::RefCell;

use dioxus_logger::tracing::info;

use super::adapter::WalletAdapter;
use super::adapter::WalletInfo;
use super::error::ConnectionError;
use super::provider::InjectedProvider;
use super::provider::ProviderNotification;

/// Where the wallet connection currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, strum::EnumIs)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected(WalletInfo),
    Error(String),
}

/// The view the presentation layer consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletStatus {
    pub is_connected: bool,
    pub wallet_info: Option<WalletInfo>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ConnectionState {
    pub fn status(&self) -> WalletStatus {
        match self {
            Self::Disconnected => WalletStatus::default(),
            Self::Connecting => WalletStatus {
                is_loading: true,
                ..Default::default()
            },
            Self::Connected(wallet_info) => WalletStatus {
                is_connected: true,
                wallet_info: Some(wallet_info.clone()),
                ..Default::default()
            },
            Self::Error(message) => WalletStatus {
                error: Some(message.clone()),
                ..Default::default()
            },
        }
    }

    pub fn wallet_info(&self) -> Option<&WalletInfo> {
        match self {
            Self::Connected(wallet_info) => Some(wallet_info),
            _ => None,
        }
    }
}

/// Kind of a transient notice shown after a wallet operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The adapter together with the connection state it drives.
pub struct WalletSession<P: InjectedProvider> {
    adapter: WalletAdapter<P>,
    state: RefCell<ConnectionState>,
}

impl<P: InjectedProvider> WalletSession<P> {
    /// Starts disconnected, or in the error state if MetaMask is missing.
    pub fn new(adapter: WalletAdapter<P>) -> Self {
        let state = if adapter.is_installed() {
            ConnectionState::Disconnected
        } else {
            ConnectionState::Error(ConnectionError::NotInstalled.to_string())
        };
        Self {
            adapter,
            state: RefCell::new(state),
        }
    }

    pub fn adapter(&self) -> &WalletAdapter<P> {
        &self.adapter
    }

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> WalletStatus {
        self.state.borrow().status()
    }

    fn set_state(&self, state: ConnectionState) {
        *self.state.borrow_mut() = state;
    }

    /// Adopts a signing context that is already live, e.g. after a remount.
    pub async fn restore(&self) -> ConnectionState {
        if let Some(wallet_info) = self.adapter.get_wallet_info().await {
            self.set_state(ConnectionState::Connected(wallet_info));
        }
        self.state()
    }

    /// Connects and reports the toast to show.
    pub async fn connect(&self) -> Toast {
        self.set_state(ConnectionState::Connecting);
        match self.adapter.connect().await {
            Ok(wallet_info) => {
                self.set_state(ConnectionState::Connected(wallet_info));
                Toast::new(ToastKind::Success, "Wallet connected successfully!")
            }
            Err(e) => {
                let message = e.to_string();
                self.set_state(ConnectionState::Error(message.clone()));
                Toast::new(ToastKind::Error, message)
            }
        }
    }

    /// Forgets the connection and clears any error.
    pub fn disconnect(&self) -> Toast {
        self.adapter.disconnect();
        self.set_state(ConnectionState::Disconnected);
        Toast::new(ToastKind::Info, "Wallet disconnected")
    }

    /// Re-reads the wallet; disconnects if the signing context is gone.
    pub async fn refresh(&self) -> Option<Toast> {
        match self.adapter.get_wallet_info().await {
            Some(wallet_info) => {
                self.set_state(ConnectionState::Connected(wallet_info));
                None
            }
            None => Some(self.disconnect()),
        }
    }

    /// Reacts to a provider event.
    pub async fn handle_notification(&self, notification: ProviderNotification) -> Option<Toast> {
        info!("provider notification: {notification:?}");
        match notification {
            ProviderNotification::AccountsChanged(accounts) => match accounts.first() {
                None => Some(self.disconnect()),
                Some(address) => {
                    self.adapter.switch_account(address);
                    self.refresh().await
                }
            },
            ProviderNotification::ChainChanged(_) => self.refresh().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::mock::MockProvider;
    use crate::wallet::provider::ProviderError;

    const ALICE: &str = "0x00000000000000000000000000000000000a11ce";
    const BOB: &str = "0x0000000000000000000000000000000000000b0b";

    fn session(provider: &MockProvider) -> WalletSession<MockProvider> {
        WalletSession::new(WalletAdapter::new(Some(provider.clone())))
    }

    async fn connected_session(provider: &MockProvider) -> WalletSession<MockProvider> {
        let session = session(provider);
        let toast = session.connect().await;
        assert!(toast.kind.is_success());
        session
    }

    #[test]
    fn missing_metamask_starts_in_error() {
        let session = WalletSession::new(WalletAdapter::<MockProvider>::new(None));
        let status = session.status();
        assert!(!status.is_connected);
        assert_eq!(
            status.error.as_deref(),
            Some("MetaMask is not installed. Please install MetaMask extension.")
        );
    }

    #[tokio::test]
    async fn permission_denial_sets_error_state() {
        let provider = MockProvider::metamask().failing(
            "eth_requestAccounts",
            ProviderError::new(4001, "User rejected the request."),
        );
        let session = session(&provider);

        let toast = session.connect().await;

        assert!(toast.kind.is_error());
        assert_eq!(
            session.state(),
            ConnectionState::Error("Connection rejected by user. Please try again.".into())
        );
        assert!(!session.status().is_connected);
        assert!(!session.status().is_loading);
    }

    #[tokio::test]
    async fn empty_account_list_disconnects() {
        let provider = MockProvider::metamask().with_accounts(&[ALICE]);
        let session = connected_session(&provider).await;
        assert!(session.state().is_connected());

        let toast = session
            .handle_notification(ProviderNotification::AccountsChanged(vec![]))
            .await;

        assert_eq!(toast, Some(Toast::new(ToastKind::Info, "Wallet disconnected")));
        assert!(session.state().is_disconnected());
        assert!(!session.adapter().is_active());
    }

    #[tokio::test]
    async fn new_account_refreshes_address() {
        let provider = MockProvider::metamask().with_accounts(&[ALICE]);
        let session = connected_session(&provider).await;

        provider.set_accounts(&[BOB]);
        let toast = session
            .handle_notification(ProviderNotification::AccountsChanged(vec![BOB.into()]))
            .await;

        assert_eq!(toast, None);
        assert_eq!(session.status().wallet_info.unwrap().address, BOB);
        assert!(session.adapter().is_active());
    }

    #[tokio::test]
    async fn chain_change_refreshes_in_place() {
        let provider = MockProvider::metamask().with_accounts(&[ALICE]);
        let session = connected_session(&provider).await;

        provider.set_chain_id(11_155_111);
        session
            .handle_notification(ProviderNotification::ChainChanged("0xaa36a7".into()))
            .await;

        let info = session.status().wallet_info.unwrap();
        assert_eq!(info.address, ALICE);
        assert_eq!(info.chain_id, 11_155_111);
        assert_eq!(info.network_name, "sepolia");
    }

    #[tokio::test]
    async fn failed_refresh_disconnects() {
        let provider = MockProvider::metamask().with_accounts(&[ALICE]);
        let session = connected_session(&provider).await;

        let provider = provider.failing("eth_getBalance", ProviderError::new(-32000, "gone"));
        let toast = session.refresh().await;

        assert!(toast.is_some());
        assert!(session.state().is_disconnected());
        drop(provider);
    }

    #[tokio::test]
    async fn disconnect_clears_error_and_is_repeatable() {
        let provider = MockProvider::metamask().failing(
            "eth_requestAccounts",
            ProviderError::new(4001, "User rejected the request."),
        );
        let session = session(&provider);
        session.connect().await;

        session.disconnect();
        session.disconnect();
        assert_eq!(session.status(), WalletStatus::default());
    }

    #[tokio::test]
    async fn restore_adopts_live_signer() {
        let provider = MockProvider::metamask().with_accounts(&[ALICE]);
        let adapter = WalletAdapter::new(Some(provider.clone()));
        adapter.connect().await.unwrap();

        let session = WalletSession::new(adapter);
        assert!(session.state().is_disconnected());
        assert!(session.restore().await.is_connected());
    }
}
