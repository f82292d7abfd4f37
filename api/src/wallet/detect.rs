//! Wallet detection: which extensions injected themselves into the page, and
//! whether more than one of them is competing for `window.ethereum`.

use serde::Serialize;

/// The self-identifying flags an injected provider exposes.
///
/// Every flag this type does not know about defaults to `false`; truthy
/// unknown `is*` flags are kept by name in `other_flags` for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProviderCapabilities {
    pub is_meta_mask: bool,
    pub is_coinbase_wallet: bool,
    pub is_token_pocket: bool,
    pub is_tron_link: bool,
    pub other_flags: Vec<String>,
}

impl ProviderCapabilities {
    /// Builds the record from raw `(flag name, value)` pairs as read from the
    /// provider object. Only keys that start with `is` are considered.
    pub fn from_flags<'a>(flags: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        let mut caps = Self::default();
        for (name, value) in flags {
            if !name.starts_with("is") {
                continue;
            }
            match name {
                "isMetaMask" => caps.is_meta_mask = value,
                "isCoinbaseWallet" => caps.is_coinbase_wallet = value,
                "isTokenPocket" => caps.is_token_pocket = value,
                "isTronLink" => caps.is_tron_link = value,
                other if value => caps.other_flags.push(other.to_string()),
                _ => {}
            }
        }
        caps
    }

    /// Names of every truthy `is*` flag, known or not.
    pub fn truthy_flags(&self) -> Vec<String> {
        let known = [
            ("isMetaMask", self.is_meta_mask),
            ("isCoinbaseWallet", self.is_coinbase_wallet),
            ("isTokenPocket", self.is_token_pocket),
            ("isTronLink", self.is_tron_link),
        ];
        known
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| name.to_string())
            .chain(self.other_flags.iter().cloned())
            .collect()
    }
}

/// What a Cardano wallet exposes under `window.cardano`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardanoInfo {
    pub name: Option<String>,
}

/// One wallet extension found in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedWallet {
    pub name: &'static str,
    pub is_meta_mask: bool,
}

/// The result of probing the host for injected wallets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostWallets {
    pub ethereum: Option<ProviderCapabilities>,
    pub cardano: Option<CardanoInfo>,
}

impl HostWallets {
    /// Lists the wallets found. A Cardano wallet only counts when an ethereum
    /// provider exists too, since it can only collide with one then.
    pub fn detected(&self) -> Vec<DetectedWallet> {
        let Some(caps) = &self.ethereum else {
            return Vec::new();
        };

        let mut wallets = Vec::new();
        let mut push = |on: bool, name: &'static str, is_meta_mask: bool| {
            if on {
                wallets.push(DetectedWallet { name, is_meta_mask });
            }
        };
        push(caps.is_meta_mask, "MetaMask", true);
        push(caps.is_coinbase_wallet, "Coinbase Wallet", false);
        push(caps.is_token_pocket, "TokenPocket", false);
        push(caps.is_tron_link, "TronLink", false);
        push(self.cardano.is_some(), "Yoroi (Cardano)", false);
        wallets
    }

    /// True when more than one wallet extension is competing.
    pub fn has_conflict(&self) -> bool {
        self.detected().len() > 1
    }
}

/// A point-in-time view of the injected providers, for the debug panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DebugSnapshot {
    pub timestamp: String,
    pub user_agent: String,
    pub ethereum_exists: bool,
    pub capabilities: ProviderCapabilities,
    pub selected_address: Option<String>,
    pub chain_id: Option<String>,
    pub is_connected: bool,
    pub other_wallets: Vec<String>,
    pub cardano_exists: bool,
    pub cardano_name: Option<String>,
}

impl DebugSnapshot {
    /// Assembles a snapshot from a detection result and provider readings.
    pub fn new(
        wallets: &HostWallets,
        selected_address: Option<String>,
        chain_id: Option<String>,
        is_connected: bool,
    ) -> Self {
        let capabilities = wallets.ethereum.clone().unwrap_or_default();
        let other_wallets = capabilities.truthy_flags();
        Self {
            ethereum_exists: wallets.ethereum.is_some(),
            capabilities,
            selected_address,
            chain_id,
            is_connected,
            other_wallets,
            cardano_exists: wallets.cardano.is_some(),
            cardano_name: wallets.cardano.as_ref().and_then(|c| c.name.clone()),
            ..Default::default()
        }
    }

    pub fn with_environment(mut self, timestamp: String, user_agent: String) -> Self {
        self.timestamp = timestamp;
        self.user_agent = user_agent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_flags_default_to_false() {
        let caps = ProviderCapabilities::from_flags([("isRabby", true), ("chainId", true)]);
        assert!(!caps.is_meta_mask);
        assert!(!caps.is_coinbase_wallet);
        assert_eq!(caps.other_flags, vec!["isRabby".to_string()]);
    }

    #[test]
    fn single_metamask_is_not_a_conflict() {
        let wallets = HostWallets {
            ethereum: Some(ProviderCapabilities::from_flags([("isMetaMask", true)])),
            cardano: None,
        };
        assert_eq!(
            wallets.detected(),
            vec![DetectedWallet {
                name: "MetaMask",
                is_meta_mask: true
            }]
        );
        assert!(!wallets.has_conflict());
    }

    #[test]
    fn competing_extensions_are_a_conflict() {
        let wallets = HostWallets {
            ethereum: Some(ProviderCapabilities::from_flags([
                ("isMetaMask", true),
                ("isTronLink", true),
            ])),
            cardano: Some(CardanoInfo::default()),
        };
        let names: Vec<_> = wallets.detected().into_iter().map(|w| w.name).collect();
        assert_eq!(names, ["MetaMask", "TronLink", "Yoroi (Cardano)"]);
        assert!(wallets.has_conflict());
    }

    #[test]
    fn cardano_alone_is_ignored() {
        let wallets = HostWallets {
            ethereum: None,
            cardano: Some(CardanoInfo {
                name: Some("yoroi".into()),
            }),
        };
        assert!(wallets.detected().is_empty());
        let snapshot = DebugSnapshot::new(&wallets, None, None, false);
        assert!(!snapshot.ethereum_exists);
        assert_eq!(snapshot.cardano_name.as_deref(), Some("yoroi"));
    }

    #[test]
    fn snapshot_lists_truthy_flags() {
        let wallets = HostWallets {
            ethereum: Some(ProviderCapabilities::from_flags([
                ("isMetaMask", true),
                ("isBraveWallet", true),
                ("isTokenPocket", false),
            ])),
            cardano: None,
        };
        let snapshot = DebugSnapshot::new(&wallets, Some("0xabc".into()), Some("0x1".into()), true);
        assert_eq!(snapshot.other_wallets, ["isMetaMask", "isBraveWallet"]);
        assert!(snapshot.is_connected);
    }
}
