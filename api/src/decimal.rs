//! Provides an exact decimal type for display amounts, order maths and
//! native-unit (wei) balances.

use std::fmt;
use std::ops::Add;
use std::ops::Mul;
use std::str::FromStr;

use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::Sign;
use num_traits::Signed;
use num_traits::Zero;
use thiserror::Error;

/// Number of decimals between wei and ether.
pub const ETHER_DECIMALS: u32 = 18;

/// `toLocaleString` renders at most this many fraction digits.
const LOCALE_MAX_FRACTION_DIGITS: u32 = 3;

/// An error that can occur when parsing a string into a `DecimalAmount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDecimalError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid number format")]
    InvalidFormat,
    /// The string holds a negative number where only positive ones are allowed.
    #[error("value must not be negative")]
    Negative,
}

/// An error for malformed hex quantities reported by a provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex quantity: {0:?}")]
pub struct ParseQuantityError(pub String);

/// A signed decimal number stored as `mantissa * 10^-scale`.
///
/// All arithmetic is exact. Rounding only happens when explicitly requested
/// through [`DecimalAmount::round_to`] or one of the formatting helpers.
/// Equality compares values, so `0.50 == 0.5`.
#[derive(Debug, Clone)]
pub struct DecimalAmount {
    mantissa: BigInt,
    scale: u32,
}

impl DecimalAmount {
    // --- Constructors ---

    /// Creates an amount from its raw parts.
    ///
    /// # Example
    /// ```
    /// // 432_575 with scale 2 represents 4325.75
    /// let amount = api::decimal::DecimalAmount::from_parts(432_575, 2);
    /// assert_eq!(amount.to_string(), "4325.75");
    /// ```
    pub fn from_parts(mantissa: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            mantissa: mantissa.into(),
            scale,
        }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self::from_parts(0, 0)
    }

    /// Converts a wei amount into ether.
    pub fn from_wei(wei: &BigUint) -> Self {
        Self::from_parts(BigInt::from_biguint(Sign::Plus, wei.clone()), ETHER_DECIMALS)
    }

    /// Parses a non-negative decimal string such as `"0.5"`, `"100"`, `".25"`
    /// or `"3."`. Surrounding whitespace is ignored.
    pub fn parse_non_negative(s: &str) -> Result<Self, ParseDecimalError> {
        let amount: Self = s.parse()?;
        if amount.mantissa.is_negative() {
            return Err(ParseDecimalError::Negative);
        }
        Ok(amount)
    }

    // --- Getters ---

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    // --- Arithmetic ---

    /// Multiplies by a rate expressed in basis points (1 bps = 0.01%).
    pub fn mul_bps(&self, bps: u32) -> Self {
        self.clone() * Self::from_parts(bps, 4)
    }

    /// Rounds half away from zero to `places` fraction digits.
    pub fn round_to(&self, places: u32) -> Self {
        if places >= self.scale {
            return self.rescale(places);
        }
        let divisor = BigInt::from(10u8).pow(self.scale - places);
        let magnitude = self.mantissa.abs();
        let mut quotient = &magnitude / &divisor;
        let remainder = &magnitude % &divisor;
        if remainder * 2u8 >= divisor {
            quotient += 1u8;
        }
        if self.mantissa.is_negative() {
            quotient = -quotient;
        }
        Self::from_parts(quotient, places)
    }

    fn rescale(&self, scale: u32) -> Self {
        debug_assert!(scale >= self.scale);
        let factor = BigInt::from(10u8).pow(scale - self.scale);
        Self::from_parts(&self.mantissa * factor, scale)
    }

    /// Drops trailing fraction zeros without changing the value.
    fn normalized(&self) -> Self {
        let ten = BigInt::from(10u8);
        let mut mantissa = self.mantissa.clone();
        let mut scale = self.scale;
        while scale > 0 && (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            scale -= 1;
        }
        Self::from_parts(mantissa, scale)
    }

    /// Returns (negative, integer digits, fraction digits) of the plain representation.
    fn digits(&self) -> (bool, String, String) {
        let negative = self.mantissa.is_negative();
        let raw = self.mantissa.abs().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return (negative, raw, String::new());
        }
        let padded = format!("{:0>width$}", raw, width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        (negative, int_part.to_string(), frac_part.to_string())
    }

    // --- Display Methods ---

    /// Formats with exactly `places` fraction digits (e.g., `"50.00"`).
    pub fn to_fixed(&self, places: u32) -> String {
        let (negative, int_part, frac_part) = self.round_to(places).digits();
        let sign = if negative { "-" } else { "" };
        if places == 0 {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac_part}")
        }
    }

    /// Formats the way a browser's `toLocaleString()` does for en-US: grouped
    /// thousands and at most three fraction digits, trailing zeros removed.
    pub fn to_locale_string(&self) -> String {
        let rounded = self.round_to(LOCALE_MAX_FRACTION_DIGITS).normalized();
        let (negative, int_part, frac_part) = rounded.digits();

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if negative && !rounded.is_zero() { "-" } else { "" };
        if frac_part.is_empty() {
            format!("{sign}{grouped}")
        } else {
            format!("{sign}{grouped}.{frac_part}")
        }
    }

    /// Formats a native-unit amount the way wallet libraries print ether:
    /// all significant fraction digits, but never fewer than one (`"1.0"`).
    pub fn to_units_string(&self) -> String {
        let (negative, int_part, frac_part) = self.normalized().digits();
        let frac = if frac_part.is_empty() { "0".to_string() } else { frac_part };
        let sign = if negative { "-" } else { "" };
        format!("{sign}{int_part}.{frac}")
    }
}

impl PartialEq for DecimalAmount {
    fn eq(&self, other: &Self) -> bool {
        let scale = self.scale.max(other.scale);
        self.rescale(scale).mantissa == other.rescale(scale).mantissa
    }
}

impl Eq for DecimalAmount {}

impl Default for DecimalAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for DecimalAmount {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseDecimalError::InvalidFormat);
        }
        if !major_str.chars().all(|c| c.is_ascii_digit())
            || !minor_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseDecimalError::InvalidFormat);
        }

        let digits = format!("{major_str}{minor_str}");
        let mut mantissa: BigInt = digits
            .parse()
            .map_err(|_| ParseDecimalError::InvalidFormat)?;
        if is_negative {
            mantissa = -mantissa;
        }

        Ok(Self::from_parts(mantissa, minor_str.len() as u32))
    }
}

impl Add for DecimalAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let scale = self.scale.max(rhs.scale);
        Self::from_parts(self.rescale(scale).mantissa + rhs.rescale(scale).mantissa, scale)
    }
}

impl Mul for DecimalAmount {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_parts(self.mantissa * rhs.mantissa, self.scale + rhs.scale)
    }
}

/// Formats the plain numeric value like JavaScript's `Number#toString`
/// (e.g., `"0.1234"`, `"15"`, `"2.5"`).
impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, int_part, frac_part) = self.normalized().digits();
        if negative {
            write!(f, "-")?;
        }
        if frac_part.is_empty() {
            write!(f, "{int_part}")
        } else {
            write!(f, "{int_part}.{frac_part}")
        }
    }
}

/// Parses an EIP-1474 hex quantity (e.g. `"0x1bc16d674ec80000"`).
pub fn parse_quantity(hex: &str) -> Result<BigUint, ParseQuantityError> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .ok_or_else(|| ParseQuantityError(hex.to_string()))?;
    if digits.is_empty() {
        return Err(ParseQuantityError(hex.to_string()));
    }
    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| ParseQuantityError(hex.to_string()))
}

/// Parses a hex quantity that must fit into a `u64`, such as a chain id.
pub fn parse_quantity_u64(hex: &str) -> Result<u64, ParseQuantityError> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .ok_or_else(|| ParseQuantityError(hex.to_string()))?;
    u64::from_str_radix(digits, 16).map_err(|_| ParseQuantityError(hex.to_string()))
}

/// Formats a wei balance as a decimal ether string (`"1.5"`, `"0.0"`).
pub fn format_ether(wei: &BigUint) -> String {
    DecimalAmount::from_wei(wei).to_units_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> DecimalAmount {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_and_partial_decimals() {
        assert_eq!(dec("0.5"), DecimalAmount::from_parts(5, 1));
        assert_eq!(dec("100"), DecimalAmount::from_parts(100, 0));
        assert_eq!(dec(".25"), DecimalAmount::from_parts(25, 2));
        assert_eq!(dec("3."), DecimalAmount::from_parts(3, 0));
        assert_eq!(dec(" 7.10 "), DecimalAmount::from_parts(71, 1));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", ".", "abc", "1.2.3", "1e3", "--1", "1,000", "+1"] {
            assert_eq!(
                bad.parse::<DecimalAmount>(),
                Err(ParseDecimalError::InvalidFormat),
                "{bad:?}"
            );
        }
        assert_eq!(
            DecimalAmount::parse_non_negative("-2"),
            Err(ParseDecimalError::Negative)
        );
    }

    #[test]
    fn fixed_rounds_half_away_from_zero() {
        assert_eq!(dec("50").to_fixed(2), "50.00");
        assert_eq!(dec("0.05").to_fixed(2), "0.05");
        assert_eq!(dec("0.005").to_fixed(2), "0.01");
        assert_eq!(dec("0.0049").to_fixed(2), "0.00");
        assert_eq!(dec("-1.235").to_fixed(2), "-1.24");
        assert_eq!(dec("1.23456").to_fixed(4), "1.2346");
    }

    #[test]
    fn locale_string_groups_thousands() {
        assert_eq!(DecimalAmount::from_parts(4_325_000, 2).to_locale_string(), "43,250");
        assert_eq!(DecimalAmount::from_parts(534_243, 2).to_locale_string(), "5,342.43");
        assert_eq!(DecimalAmount::from_parts(45, 2).to_locale_string(), "0.45");
        assert_eq!(DecimalAmount::from_parts(8_563_710, 2).to_locale_string(), "85,637.1");
        assert_eq!(DecimalAmount::from_parts(1234, 4).to_locale_string(), "0.123");
        assert_eq!(DecimalAmount::from_parts(999, 0).to_locale_string(), "999");
        assert_eq!(
            DecimalAmount::from_parts(1_234_567_890i64, 0).to_locale_string(),
            "1,234,567,890"
        );
    }

    #[test]
    fn display_matches_number_to_string() {
        assert_eq!(DecimalAmount::from_parts(150, 1).to_string(), "15");
        assert_eq!(DecimalAmount::from_parts(25, 1).to_string(), "2.5");
        assert_eq!(DecimalAmount::from_parts(1234, 4).to_string(), "0.1234");
        assert_eq!(DecimalAmount::zero().to_string(), "0");
    }

    #[test]
    fn bps_multiplication_is_exact() {
        let total = dec("0.5") * dec("100");
        assert_eq!(total.mul_bps(10).to_fixed(2), "0.05");
        assert_eq!(total.mul_bps(10), dec("0.05"));
    }

    #[test]
    fn formats_wei_as_ether() {
        let one_and_a_half = parse_quantity("0x14d1120d7b160000").unwrap();
        assert_eq!(format_ether(&one_and_a_half), "1.5");
        assert_eq!(format_ether(&parse_quantity("0x0").unwrap()), "0.0");
        assert_eq!(format_ether(&parse_quantity("0xde0b6b3a7640000").unwrap()), "1.0");
        assert_eq!(format_ether(&parse_quantity("0x1").unwrap()), "0.000000000000000001");
    }

    #[test]
    fn hex_quantities() {
        assert_eq!(parse_quantity_u64("0x1"), Ok(1));
        assert_eq!(parse_quantity_u64("0xaa36a7"), Ok(11_155_111));
        assert!(parse_quantity_u64("1").is_err());
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }
}
