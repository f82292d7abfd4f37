//! Platform independent core of the trading dashboard: the wallet adapter
//! and its provider contract, trade quotes, and the mock market data.

pub mod chain;
pub mod decimal;
pub mod market;
pub mod prefs;
pub mod trade;
pub mod wallet;
