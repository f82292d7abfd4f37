//! Defines the EVM chains the dashboard knows how to label.

use serde::Deserialize;
use serde::Serialize;

/// A known EVM network, identified by its chain id.
#[derive(
    Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, strum::EnumIs, strum::EnumIter,
)]
pub enum Chain {
    Mainnet,
    Goerli,
    Sepolia,
    Polygon,
    Bsc,
}

/// The accent used when rendering a network badge.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum NetworkAccent {
    Blue,
    Purple,
    Yellow,
    #[default]
    Gray,
}

impl NetworkAccent {
    /// CSS color for the accent.
    pub fn css_color(&self) -> &'static str {
        match self {
            Self::Blue => "#60a5fa",
            Self::Purple => "#c084fc",
            Self::Yellow => "#facc15",
            Self::Gray => "#9ca3af",
        }
    }
}

impl Chain {
    /// Looks up a chain by id. Returns `None` for chains we have no label for.
    pub fn from_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(Self::Mainnet),
            5 => Some(Self::Goerli),
            11_155_111 => Some(Self::Sepolia),
            137 => Some(Self::Polygon),
            56 => Some(Self::Bsc),
            _ => None,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Goerli => 5,
            Self::Sepolia => 11_155_111,
            Self::Polygon => 137,
            Self::Bsc => 56,
        }
    }

    /// The short network name wallet libraries report (e.g. "mainnet").
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Goerli => "goerli",
            Self::Sepolia => "sepolia",
            Self::Polygon => "matic",
            Self::Bsc => "bnb",
        }
    }

    /// The human readable network name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mainnet => "Ethereum Mainnet",
            Self::Goerli => "Goerli Testnet",
            Self::Sepolia => "Sepolia Testnet",
            Self::Polygon => "Polygon",
            Self::Bsc => "BSC",
        }
    }

    pub fn accent(&self) -> NetworkAccent {
        match self {
            Self::Mainnet | Self::Sepolia => NetworkAccent::Blue,
            Self::Goerli | Self::Polygon => NetworkAccent::Purple,
            Self::Bsc => NetworkAccent::Yellow,
        }
    }
}

/// Short network name for any chain id, `"unknown"` if unlabeled.
pub fn network_name(chain_id: u64) -> &'static str {
    Chain::from_id(chain_id).map_or("unknown", |c| c.short_name())
}

/// Display name for any chain id, `"Unknown Network"` if unlabeled.
pub fn network_display_name(chain_id: u64) -> &'static str {
    Chain::from_id(chain_id).map_or("Unknown Network", |c| c.display_name())
}

pub fn network_accent(chain_id: u64) -> NetworkAccent {
    Chain::from_id(chain_id).map(|c| c.accent()).unwrap_or_default()
}
