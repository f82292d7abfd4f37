use serde::Deserialize;
use serde::Serialize;

use crate::trade::DEFAULT_FEE_BPS;

/// Represents all user prefs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    show_wallet_debug: bool,
    trade_fee_bps: u32,
}

impl UserPrefs {
    /// Creates a UserPrefs instance from build-time environment variables,
    /// with in-code defaults.
    ///
    /// The browser has no process environment, so values are captured when
    /// the web bundle is compiled.
    ///
    /// # Environment Variables
    /// - `WALLET_DEBUG`: "true" or "1" shows the wallet debug panel.
    ///   defaults to true for debug builds, false for release builds.
    /// - `TRADE_FEE_BPS`: trade fee in basis points. defaults to 10 (0.1%).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "WALLET_DEBUG" => option_env!("WALLET_DEBUG"),
            "TRADE_FEE_BPS" => option_env!("TRADE_FEE_BPS"),
            _ => None,
        })
    }

    /// Like [`UserPrefs::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        /// Lowest priority setting for the debug panel.
        const SHOW_WALLET_DEBUG: bool = cfg!(debug_assertions);

        let show_wallet_debug = match lookup("WALLET_DEBUG") {
            Some(val) => val.eq_ignore_ascii_case("true") || val == "1",
            None => SHOW_WALLET_DEBUG,
        };

        let trade_fee_bps = lookup("TRADE_FEE_BPS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_FEE_BPS);

        Self {
            show_wallet_debug,
            trade_fee_bps,
        }
    }

    pub fn show_wallet_debug(&self) -> bool {
        self.show_wallet_debug
    }

    pub fn trade_fee_bps(&self) -> u32 {
        self.trade_fee_bps
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let prefs = UserPrefs::from_lookup(|_| None);
        assert_eq!(prefs.trade_fee_bps(), 10);
        assert_eq!(prefs.show_wallet_debug(), cfg!(debug_assertions));
    }

    #[test]
    fn overrides_are_applied() {
        let prefs = UserPrefs::from_lookup(|key| match key {
            "WALLET_DEBUG" => Some("TRUE"),
            "TRADE_FEE_BPS" => Some(" 25 "),
            _ => None,
        });
        assert!(prefs.show_wallet_debug());
        assert_eq!(prefs.trade_fee_bps(), 25);
    }

    #[test]
    fn unparseable_values_fall_back() {
        let prefs = UserPrefs::from_lookup(|key| match key {
            "WALLET_DEBUG" => Some("yes please"),
            "TRADE_FEE_BPS" => Some("ten"),
            _ => None,
        });
        assert!(!prefs.show_wallet_debug());
        assert_eq!(prefs.trade_fee_bps(), 10);
    }
}
