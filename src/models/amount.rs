//! Amount type for expense values
//!
//! Expenses are recorded as plain decimal numbers in an unspecified currency.
//! The value is kept as `f64` so that ledger files written by other tools
//! (plain JSON numbers) load without conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;
use thiserror::Error;

/// A non-negative spending amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Amount;
    /// let amount = Amount::new(12.5);
    /// assert_eq!(amount.to_string(), "12.5");
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts formats: "12", "12.50", " 12.5 ", ".5", "1e3"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();

        let value: f64 = s
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(s.to_string()));
        }
        if value < 0.0 {
            return Err(AmountParseError::Negative(s.to_string()));
        }

        // "-0" parses to negative zero
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Format with exactly two decimal places
    pub fn format_fixed(&self) -> String {
        format!("{:.2}", self.0)
    }
}

/// Shortest round-trip decimal, with a trailing ".0" for integral values
///
/// Magnitudes below 1e-4 or from 1e16 up switch to exponent notation with a
/// signed, two-digit exponent (`1e-05`, `1.5e+16`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if self.0.is_finite() && self.0 != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            let scientific = format!("{:e}", self.0);
            let (mantissa, exponent) = scientific
                .split_once('e')
                .unwrap_or((scientific.as_str(), "0"));
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
        } else if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("Invalid amount: {0}")]
    InvalidFormat(String),

    #[error("Amount must not be negative: {0}")]
    Negative(String),

    #[error("Amount must be a finite number: {0}")]
    NotFinite(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(12.5).to_string(), "12.5");
        assert_eq!(Amount::new(10.0).to_string(), "10.0");
        assert_eq!(Amount::new(0.0).to_string(), "0.0");
        assert_eq!(Amount::new(4.75).to_string(), "4.75");
        assert_eq!(Amount::new(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn test_display_extremes_use_exponent() {
        assert_eq!(Amount::new(1e16).to_string(), "1e+16");
        assert_eq!(Amount::new(1.5e20).to_string(), "1.5e+20");
        assert_eq!(Amount::new(1e-5).to_string(), "1e-05");
        assert_eq!(Amount::new(2.5e-7).to_string(), "2.5e-07");
        assert_eq!(Amount::new(1e300).to_string(), "1e+300");

        // Just inside the plain-decimal range
        assert_eq!(Amount::new(0.0001).to_string(), "0.0001");
        assert_eq!(Amount::new(9999999999999998.0).to_string(), "9999999999999998.0");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(Amount::new(15.0).format_fixed(), "15.00");
        assert_eq!(Amount::new(12.5).format_fixed(), "12.50");
        assert_eq!(Amount::new(0.1 + 0.2).format_fixed(), "0.30");
        assert_eq!(Amount::zero().format_fixed(), "0.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("12.50").unwrap().value(), 12.5);
        assert_eq!(Amount::parse("12").unwrap().value(), 12.0);
        assert_eq!(Amount::parse("  7.25\n").unwrap().value(), 7.25);
        assert_eq!(Amount::parse(".5").unwrap().value(), 0.5);
        assert_eq!(Amount::parse("1e3").unwrap().value(), 1000.0);
    }

    #[test]
    fn test_parse_negative_zero_is_zero() {
        let amount = Amount::parse("-0").unwrap();
        assert!(amount.is_zero());
        assert_eq!(amount.to_string(), "0.0");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Amount::parse("abc"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse(""),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("$12"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("-5"),
            Err(AmountParseError::Negative(_))
        ));
        assert!(matches!(
            Amount::parse("inf"),
            Err(AmountParseError::NotFinite(_))
        ));
        assert!(matches!(
            Amount::parse("NaN"),
            Err(AmountParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let amount = Amount::new(12.5);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "12.5");

        // Integer JSON numbers are accepted too
        let deserialized: Amount = serde_json::from_str("10").unwrap();
        assert_eq!(deserialized.value(), 10.0);
    }
}
