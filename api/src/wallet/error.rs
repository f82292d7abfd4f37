use thiserror::Error;

use super::provider::ProviderError;
use super::provider::USER_REJECTED_CODE;

/// Why a wallet connection attempt failed.
///
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum ConnectionError {
    #[error("MetaMask is not installed. Please install MetaMask extension.")]
    NotInstalled,
    #[error("Connection rejected by user. Please try again.")]
    UserRejected,
    #[error("MetaMask is locked. Please unlock MetaMask and try again.")]
    Locked,
    #[error("{0}")]
    Unknown(String),
}

impl From<ProviderError> for ConnectionError {
    fn from(e: ProviderError) -> Self {
        if e.code == USER_REJECTED_CODE || e.message.contains("User rejected") {
            Self::UserRejected
        } else if e.message.to_lowercase().contains("locked") {
            Self::Locked
        } else {
            Self::Unknown(e.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_provider_errors() {
        assert_eq!(
            ConnectionError::from(ProviderError::new(4001, "denied")),
            ConnectionError::UserRejected
        );
        assert_eq!(
            ConnectionError::from(ProviderError::new(-1, "MetaMask: User rejected the request.")),
            ConnectionError::UserRejected
        );
        assert_eq!(
            ConnectionError::from(ProviderError::new(-32603, "Wallet is Locked")),
            ConnectionError::Locked
        );
        assert_eq!(
            ConnectionError::from(ProviderError::new(-32002, "Request already pending")),
            ConnectionError::Unknown("Request already pending".into())
        );
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ConnectionError::UserRejected.to_string(),
            "Connection rejected by user. Please try again."
        );
        assert_eq!(ConnectionError::Unknown("boom".into()).to_string(), "boom");
    }
}
