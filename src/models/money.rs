//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that bucket totals always
//! add up to the sum of their inputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude a single amount may have ($1,000,000,000.00)
    pub const MAX_AMOUNT: Money = Money(100_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1250); // $12.50
    /// assert_eq!(amount.to_decimal_string(), "12.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Amount as a floating point value, for chart geometry
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a user-entered amount
    ///
    /// Accepts "12.50", "12.5", "$12.50", "12" and a leading minus sign.
    /// Extra fractional digits round half away from zero to the nearest cent.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());
        let too_large = || MoneyParseError::TooLarge(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, frac) = match rest.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (rest, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let dollars: i64 = match whole.trim_start_matches('0') {
            "" => 0,
            digits if digits.len() > 12 => return Err(too_large()),
            digits => digits.parse().map_err(|_| invalid())?,
        };

        let digit = |i: usize| {
            frac.as_bytes()
                .get(i)
                .map_or(0, |b| i64::from(b - b'0'))
        };
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(too_large)?;
        if total > Self::MAX_AMOUNT.0 {
            return Err(too_large());
        }

        Ok(Self(if negative { -total } else { total }))
    }

    /// Shortest decimal form with at least one fractional digit
    ///
    /// `1250` → `"12.5"`, `1000` → `"10.0"`, `325` → `"3.25"`.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let dollars = self.dollars().abs();
        let cents = self.cents_part();
        if cents % 10 == 0 {
            format!("{}{}.{}", sign, dollars, cents / 10)
        } else {
            format!("{}{}.{:02}", sign, dollars, cents)
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.0 < 0 {
            format!("-{}{}.{:02}", symbol, self.dollars().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    /// Saturates at the i64 bounds instead of overflowing
    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid amount: {0}")]
    InvalidFormat(String),

    #[error("Amount exceeds the maximum of $1,000,000,000.00: {0}")]
    TooLarge(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(1050).format_with_symbol("€"), "€10.50");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(1250).to_decimal_string(), "12.5");
        assert_eq!(Money::from_cents(1000).to_decimal_string(), "10.0");
        assert_eq!(Money::from_cents(325).to_decimal_string(), "3.25");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_decimal_string(), "0.0");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse(" 10.5 ").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("-3").unwrap().cents(), -300);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_parse_rounds_to_cents() {
        assert_eq!(Money::parse("12.345").unwrap().cents(), 1235);
        assert_eq!(Money::parse("12.344").unwrap().cents(), 1234);
        assert_eq!(Money::parse("1.999").unwrap().cents(), 200);
        assert_eq!(Money::parse("0.005").unwrap().cents(), 1);
        assert_eq!(Money::parse("-2.675").unwrap().cents(), -268);
        assert_eq!(Money::parse("3.14159265").unwrap().cents(), 314);
    }

    #[test]
    fn test_parse_rejects_amounts_over_max() {
        assert_eq!(Money::parse("1000000000").unwrap(), Money::MAX_AMOUNT);
        assert!(matches!(
            Money::parse("1000000000.01"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("-99999999999999999999999"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert_eq!(Money::parse("0001.50").unwrap().cents(), 150);
    }

    #[test]
    fn test_sum_saturates() {
        let total: Money = [Money::from_cents(i64::MAX), Money::from_cents(1)]
            .iter()
            .sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut acc = Money::from_cents(i64::MAX - 1);
        acc += Money::from_cents(10);
        assert_eq!(acc.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
