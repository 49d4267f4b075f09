//! Money type for representing currency amounts
//!
//! Amounts are whole currency units stored as i64. User input goes through
//! [`Money::parse`], which either yields a number or an error; nothing is
//! coerced silently. Single amounts are capped at [`Money::MAX`] and
//! arithmetic saturates, so summing stored amounts never overflows.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from input or storage (one quadrillion units)
    pub const MAX: Money = Money(1_000_000_000_000_000);

    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use wedding_planner::models::Money;
    /// let amount = Money::from_units(5_000_000);
    /// assert_eq!(amount.units(), 5_000_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts plain digits with optional grouping commas and an optional
    /// leading `₩` or `$`: "5000000", "5,000,000", "₩5,000,000".
    /// Rejects empty input, fractions, signs, anything non-numeric and
    /// amounts above [`Money::MAX`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        if trimmed.starts_with('-') {
            return Err(MoneyParseError::Negative(trimmed.to_string()));
        }

        let digits = trimmed
            .strip_prefix('₩')
            .or_else(|| trimmed.strip_prefix('$'))
            .unwrap_or(trimmed)
            .trim_start();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == ',') {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        let cleaned: String = digits.chars().filter(|c| *c != ',').collect();
        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        // Anything longer than i64 can hold is out of range, not malformed
        match cleaned.parse::<i64>() {
            Ok(units) => Self::checked_amount(units)
                .ok_or_else(|| MoneyParseError::TooLarge(trimmed.to_string())),
            Err(_) => Err(MoneyParseError::TooLarge(trimmed.to_string())),
        }
    }

    /// The amount if it lies within `0..=Money::MAX`
    pub fn checked_amount(units: i64) -> Option<Self> {
        (0..=Self::MAX.0).contains(&units).then_some(Self(units))
    }

    /// Write the absolute value with thousands separators
    pub fn grouped_digits(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Deserialize an amount stored either as a number or a numeric string
    ///
    /// Documents written by other clients are loosely typed; this is the
    /// explicit conversion applied before anything is summed.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientMoneyVisitor)
    }
}

struct LenientMoneyVisitor;

impl<'de> Visitor<'de> for LenientMoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative whole amount as a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        if v < 0 {
            return Err(E::custom(format!("negative amount: {}", v)));
        }
        Money::checked_amount(v).ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(Money::checked_amount)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() || v < 0.0 || v.fract() != 0.0 {
            return Err(E::custom(format!("not a whole amount: {}", v)));
        }
        if v > Money::MAX.0 as f64 {
            return Err(E::custom(format!("amount out of range: {}", v)));
        }
        Ok(Money(v as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(E::custom)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.grouped_digits())
        } else {
            write!(f, "{}", self.grouped_digits())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    Negative(String),
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount is required"),
            Self::Negative(s) => write!(f, "Amount cannot be negative: {}", s),
            Self::InvalidFormat(s) => write!(f, "Amount is not a whole number: {}", s),
            Self::TooLarge(s) => write!(f, "Amount is too large: {} (max {})", s, Money::MAX),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_grouped() {
        assert_eq!(Money::parse("5000000").unwrap().units(), 5_000_000);
        assert_eq!(Money::parse(" 5,000,000 ").unwrap().units(), 5_000_000);
        assert_eq!(Money::parse("₩2,000,000").unwrap().units(), 2_000_000);
        assert_eq!(Money::parse("$15").unwrap().units(), 15);
        assert_eq!(Money::parse("0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        assert!(matches!(Money::parse("-100"), Err(MoneyParseError::Negative(_))));
        assert!(matches!(Money::parse("abc"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("12.5"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("₩"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse(",,,"), Err(MoneyParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_caps_amount() {
        assert_eq!(Money::parse("1,000,000,000,000,000").unwrap(), Money::MAX);
        assert!(matches!(
            Money::parse("1000000000000001"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("9223372036854775807"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::TooLarge(_))
        ));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_units(i64::MAX);
        assert_eq!((big + Money::from_units(1)).units(), i64::MAX);

        let mut total = big;
        total += big;
        assert_eq!(total.units(), i64::MAX);

        assert_eq!((Money::from_units(i64::MIN) - Money::from_units(1)).units(), i64::MIN);
        assert_eq!([big, big, big].iter().sum::<Money>().units(), i64::MAX);
    }

    #[test]
    fn test_grouped_digits() {
        assert_eq!(Money::from_units(0).grouped_digits(), "0");
        assert_eq!(Money::from_units(999).grouped_digits(), "999");
        assert_eq!(Money::from_units(1000).grouped_digits(), "1,000");
        assert_eq!(Money::from_units(15_000_000).grouped_digits(), "15,000,000");
        assert_eq!(Money::from_units(-1_234_567).to_string(), "-1,234,567");
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_units(1), Money::from_units(2), Money::from_units(3)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.units(), 6);

        let empty: [Money; 0] = [];
        assert_eq!(empty.iter().sum::<Money>(), Money::zero());
    }

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "Money::deserialize_lenient")]
        amount: Money,
    }

    #[test]
    fn test_lenient_deserialize() {
        let row: Row = serde_json::from_str(r#"{"amount": 5000000}"#).unwrap();
        assert_eq!(row.amount.units(), 5_000_000);

        let row: Row = serde_json::from_str(r#"{"amount": "2000000"}"#).unwrap();
        assert_eq!(row.amount.units(), 2_000_000);

        let row: Row = serde_json::from_str(r#"{"amount": 8000000.0}"#).unwrap();
        assert_eq!(row.amount.units(), 8_000_000);

        assert!(serde_json::from_str::<Row>(r#"{"amount": "lots"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"amount": 1.5}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"amount": -3}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"amount": 9223372036854775807}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"amount": "9223372036854775807"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"amount": 1e300}"#).is_err());
    }
}
