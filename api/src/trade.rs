//! The simulated order entry form. Nothing here reaches an exchange; an
//! accepted order is only announced to the user.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::decimal::DecimalAmount;
use crate::decimal::ParseDecimalError;

/// The only pair the form trades.
pub const TRADE_PAIR: &str = "BTC/USDT";
pub const BASE_ASSET: &str = "BTC";
pub const QUOTE_ASSET: &str = "USDT";

/// Fee charged on the order total, in basis points (0.1%).
pub const DEFAULT_FEE_BPS: u32 = 10;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum TradeSide {
    #[default]
    Buy,
    Sell,
}

impl TradeSide {
    pub fn upper(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

/// Names a numeric input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum TradeField {
    Amount,
    Price,
}

/// A problem with one of the numeric inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeInputError {
    #[error("{0} is required")]
    Missing(TradeField),
    #[error("{0}: {1}")]
    Invalid(TradeField, ParseDecimalError),
}

impl TradeInputError {
    pub fn field(&self) -> TradeField {
        match self {
            Self::Missing(field) | Self::Invalid(field, _) => *field,
        }
    }
}

/// Order total and fee, both formatted with two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeQuote {
    pub total: String,
    pub fee: String,
}

impl TradeQuote {
    fn empty() -> Self {
        Self {
            total: "0.00".to_string(),
            fee: "0.00".to_string(),
        }
    }
}

/// The raw, user-edited state of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeForm {
    pub side: TradeSide,
    pub amount: String,
    pub price: String,
}

impl TradeForm {
    fn text(&self, field: TradeField) -> &str {
        match field {
            TradeField::Amount => self.amount.trim(),
            TradeField::Price => self.price.trim(),
        }
    }

    /// Validates one input. An empty input is not an error here; it only
    /// matters on submit.
    pub fn field_error(&self, field: TradeField) -> Option<TradeInputError> {
        let text = self.text(field);
        if text.is_empty() {
            return None;
        }
        DecimalAmount::parse_non_negative(text)
            .err()
            .map(|e| TradeInputError::Invalid(field, e))
    }

    fn parse(&self, field: TradeField) -> Result<DecimalAmount, TradeInputError> {
        let text = self.text(field);
        if text.is_empty() {
            return Err(TradeInputError::Missing(field));
        }
        DecimalAmount::parse_non_negative(text).map_err(|e| TradeInputError::Invalid(field, e))
    }

    /// Total and fee for the current inputs. With either input empty both
    /// read `"0.00"`. The fee is taken on the unrounded total.
    pub fn quote(&self, fee_bps: u32) -> Result<TradeQuote, TradeInputError> {
        if self.text(TradeField::Amount).is_empty() || self.text(TradeField::Price).is_empty() {
            return Ok(TradeQuote::empty());
        }
        let total = self.parse(TradeField::Amount)? * self.parse(TradeField::Price)?;
        Ok(TradeQuote {
            total: total.to_fixed(2),
            fee: total.mul_bps(fee_bps).to_fixed(2),
        })
    }

    /// Accepts the order when both inputs hold valid numbers.
    pub fn submit(&self) -> Result<TradeOrder, TradeInputError> {
        Ok(TradeOrder {
            side: self.side,
            amount: self.parse(TradeField::Amount)?,
            price: self.parse(TradeField::Price)?,
        })
    }

    /// Clears the inputs but keeps the side.
    pub fn reset(&mut self) {
        self.amount.clear();
        self.price.clear();
    }
}

/// An order accepted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeOrder {
    pub side: TradeSide,
    pub amount: DecimalAmount,
    pub price: DecimalAmount,
}

/// The confirmation shown to the user, e.g. `BUY order placed: 0.5 BTC at $100`.
impl fmt::Display for TradeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} order placed: {} {} at ${}",
            self.side.upper(),
            self.amount,
            BASE_ASSET,
            self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str, price: &str) -> TradeForm {
        TradeForm {
            side: TradeSide::Buy,
            amount: amount.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn quote_for_half_a_bitcoin() {
        let quote = form("0.5", "100").quote(DEFAULT_FEE_BPS).unwrap();
        assert_eq!(quote.total, "50.00");
        assert_eq!(quote.fee, "0.05");
    }

    #[test]
    fn quote_uses_live_price_scale() {
        let quote = form("0.1234", "43250").quote(DEFAULT_FEE_BPS).unwrap();
        assert_eq!(quote.total, "5337.05");
        assert_eq!(quote.fee, "5.34");
    }

    #[test]
    fn empty_inputs_quote_zero() {
        for (amount, price) in [("", ""), ("1", ""), ("", "100"), ("  ", "100")] {
            let quote = form(amount, price).quote(DEFAULT_FEE_BPS).unwrap();
            assert_eq!(quote, TradeQuote::empty());
        }
    }

    #[test]
    fn invalid_input_is_reported_not_nan() {
        let f = form("abc", "100");
        assert_eq!(
            f.quote(DEFAULT_FEE_BPS),
            Err(TradeInputError::Invalid(
                TradeField::Amount,
                ParseDecimalError::InvalidFormat
            ))
        );
        assert_eq!(f.field_error(TradeField::Price), None);
        assert_eq!(
            form("1", "-5").field_error(TradeField::Price),
            Some(TradeInputError::Invalid(
                TradeField::Price,
                ParseDecimalError::Negative
            ))
        );
    }

    #[test]
    fn custom_fee_rate() {
        let quote = form("2", "50").quote(25).unwrap();
        assert_eq!(quote.total, "100.00");
        assert_eq!(quote.fee, "0.25");
    }

    #[test]
    fn submit_announces_the_order() {
        let order = form("0.5", "100").submit().unwrap();
        assert_eq!(order.to_string(), "BUY order placed: 0.5 BTC at $100");

        let mut f = form("2.50", "43255");
        f.side = TradeSide::Sell;
        assert_eq!(
            f.submit().unwrap().to_string(),
            "SELL order placed: 2.5 BTC at $43255"
        );
    }

    #[test]
    fn submit_requires_both_fields() {
        assert_eq!(
            form("", "100").submit(),
            Err(TradeInputError::Missing(TradeField::Amount))
        );
        assert_eq!(
            form("1", "").submit().unwrap_err().field(),
            TradeField::Price
        );
    }

    #[test]
    fn reset_keeps_side() {
        let mut f = form("1", "2");
        f.side = TradeSide::Sell;
        f.reset();
        assert_eq!(
            f,
            TradeForm {
                side: TradeSide::Sell,
                ..Default::default()
            }
        );
    }
}
