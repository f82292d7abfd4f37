//! Everything wallet related: the provider contract, detection of injected
//! extensions, the adapter and the connection session built on top of it.

pub mod adapter;
pub mod detect;
pub mod error;
#[cfg(test)]
mod mock;
pub mod provider;
pub mod session;

pub use adapter::Subscription;
pub use adapter::WalletAdapter;
pub use adapter::WalletInfo;
pub use error::ConnectionError;
pub use provider::InjectedProvider;
pub use session::ConnectionState;
pub use session::WalletSession;
