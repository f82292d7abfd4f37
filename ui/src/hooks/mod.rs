pub mod use_wallet;

pub use use_wallet::use_wallet;
pub use use_wallet::use_wallet_provider;
pub use use_wallet::WalletContext;
