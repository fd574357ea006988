//! Money types with precise decimal arithmetic
//!
//! This module provides a representation of bill amounts using rust_decimal
//! so that prices and totals add up without floating-point drift.
//!
//! Amounts entered by people (form fields) or supplied by the recognition
//! service are never rejected: anything that is not a usable number is
//! coerced to zero. See [`Money::parse_lenient`] and [`Money::from_json_lenient`].

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal places used when displaying an amount
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Number of decimal places kept internally
pub const STORAGE_DECIMAL_PLACES: u32 = 4;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount in the bill's (single, implicit) currency
///
/// Amounts are stored with 4 decimal places and displayed with 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(STORAGE_DECIMAL_PLACES),
        }
    }

    /// Creates Money from an integer amount in cents
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, DISPLAY_DECIMAL_PLACES))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Parses a strict decimal string
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the text is not a decimal number
    pub fn parse(text: &str) -> Result<Self, MoneyError> {
        let trimmed = text.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Self::new)
            .map_err(|_| MoneyError::InvalidAmount(text.to_string()))
    }

    /// Parses user input, treating anything unusable as zero
    ///
    /// Empty strings, whitespace and non-numeric text all yield `0`.
    pub fn parse_lenient(text: &str) -> Self {
        Self::parse(text).unwrap_or_default()
    }

    /// Converts a float, treating NaN and infinities as zero
    pub fn from_f64_lossy(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        // Going through the shortest textual form keeps 18.99 as 18.99
        Self::parse(&value.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(value).map(Self::new))
            .unwrap_or_default()
    }

    /// Converts a JSON value, treating anything that is not a number or a
    /// numeric string as zero
    pub fn from_json_lenient(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(number) => Self::parse(&number.to_string())
                .ok()
                .or_else(|| number.as_f64().map(Self::from_f64_lossy))
                .unwrap_or_default(),
            serde_json::Value::String(text) => Self::parse_lenient(text),
            _ => Self::zero(),
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
        }
    }

    /// Clamps negative amounts to zero
    pub fn non_negative(&self) -> Self {
        if self.is_negative() {
            Self::zero()
        } else {
            *self
        }
    }

    /// Rounds to whole cents
    pub fn round_to_cents(&self) -> Self {
        Self {
            amount: self.amount.round_dp(DISPLAY_DECIMAL_PLACES),
        }
    }

    /// Returns the amount as a float for display layers that need one
    pub fn to_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or_default()
    }

    /// Checked addition that returns an error on overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that returns an error on overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_sub(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.dp$}",
            self.amount.round_dp(DISPLAY_DECIMAL_PLACES),
            dp = DISPLAY_DECIMAL_PLACES as usize
        )
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.amount
    }
}

/// Operator arithmetic saturates at the bounds of `Decimal`
///
/// Use [`Money::checked_add`] where overflow must be detected.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount.saturating_add(other.amount))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.amount.saturating_sub(other.amount))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.amount, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    /// Deserialization never fails on the value itself: numbers and numeric
    /// strings are read, everything else becomes zero.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Money::from_json_lenient(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(18.99));
        assert_eq!(m.amount(), dec!(18.99));
    }

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(3432);
        assert_eq!(m.amount(), dec!(34.32));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(34.32));
        let b = Money::new(dec!(31.49));

        assert_eq!((a - b).amount(), dec!(2.83));
        assert_eq!((a + b).amount(), dec!(65.81));
    }

    #[test]
    fn test_operators_saturate_at_bounds() {
        let huge = Money::parse_lenient("79228162514264337593543950335");

        assert_eq!((huge + huge).amount(), Decimal::MAX);
        assert_eq!((-huge - huge).amount(), Decimal::MIN);
        assert_eq!([huge, huge, huge].iter().sum::<Money>().amount(), Decimal::MAX);
        assert_eq!(huge.checked_add(&huge), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_display_rounds_to_cents() {
        assert_eq!(Money::new(dec!(12.5)).to_string(), "12.50");
        assert_eq!(Money::new(dec!(18.999)).to_string(), "19.00");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(Money::parse_lenient(" 50.97 ").amount(), dec!(50.97));
        assert!(Money::parse_lenient("").is_zero());
        assert!(Money::parse_lenient("abc").is_zero());
    }

    #[test]
    fn test_float_conversion_keeps_short_form() {
        assert_eq!(Money::from_f64_lossy(18.99).amount(), dec!(18.99));
        assert!(Money::from_f64_lossy(f64::NAN).is_zero());
        assert!(Money::from_f64_lossy(f64::INFINITY).is_zero());
    }

    #[test]
    fn test_non_negative_clamps() {
        assert!(Money::new(dec!(-3)).non_negative().is_zero());
        assert_eq!(Money::new(dec!(3)).non_negative().amount(), dec!(3));
    }

    #[test]
    fn test_serde_is_lenient() {
        let m: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(m.amount(), dec!(12.5));

        let m: Money = serde_json::from_str("\"4.58\"").unwrap();
        assert_eq!(m.amount(), dec!(4.58));

        let m: Money = serde_json::from_str("null").unwrap();
        assert!(m.is_zero());

        let json = serde_json::to_string(&Money::new(dec!(55.55))).unwrap();
        assert_eq!(json, "55.55");
    }
}
