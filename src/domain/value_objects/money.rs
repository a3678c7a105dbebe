//! # Money
//!
//! Immutable monetary value pairing an amount with a currency.
//!
//! This module provides:
//! - [`Money`] - A decimal amount tagged with a [`Currency`]
//!
//! Construction, scaling, and comparison are total: no operation validates
//! its inputs or returns an error.
//!
//! # Examples
//!
//! ```
//! use moneda::domain::value_objects::Money;
//! use rust_decimal::Decimal;
//!
//! let five = Money::dollar(Decimal::new(5, 0));
//! assert_eq!(five.times(Decimal::new(2, 0)), Money::dollar(Decimal::new(10, 0)));
//! ```

use crate::domain::value_objects::currency::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// An immutable monetary value.
///
/// Pairs a [`Decimal`] amount with a [`Currency`] code. Both fields are fixed
/// at construction; [`Money::times`] returns a new value and leaves the
/// receiver untouched.
///
/// Equality is value equality: two `Money` values are equal iff their amounts
/// are numerically equal and their currency codes are equal. `Decimal`
/// comparison is exact, so `5` equals `5.00` but `Money::dollar` never equals
/// `Money::peso` regardless of amount.
///
/// # Examples
///
/// ```
/// use moneda::domain::value_objects::Money;
/// use rust_decimal::Decimal;
///
/// let five = Money::dollar(Decimal::new(5, 0));
/// let ten = five.times(Decimal::new(2, 0));
///
/// assert_eq!(ten, Money::dollar(Decimal::new(10, 0)));
/// assert_ne!(ten, Money::peso(Decimal::new(10, 0)));
/// assert_eq!(five.currency().as_str(), "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Numeric amount. Negative, zero, and fractional values are all valid.
    amount: Decimal,
    /// Currency code, stored verbatim.
    currency: Currency,
}

impl Money {
    /// Creates a monetary value with an explicit amount and currency.
    ///
    /// Both fields are stored verbatim; the currency is not checked against
    /// any known set.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneda::domain::value_objects::{Currency, Money};
    /// use rust_decimal::Decimal;
    ///
    /// let value = Money::new(Decimal::new(7, 0), Currency::new("CHF"));
    /// assert_eq!(value.currency().as_str(), "CHF");
    /// ```
    #[inline]
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a US dollar value (`"USD"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use moneda::domain::value_objects::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let five = Money::dollar(Decimal::new(5, 0));
    /// assert!(five.currency().is_usd());
    /// ```
    #[inline]
    #[must_use]
    pub fn dollar(amount: Decimal) -> Self {
        Self::new(amount, Currency::usd())
    }

    /// Creates a Mexican peso value (`"MXN"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use moneda::domain::value_objects::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let five = Money::peso(Decimal::new(5, 0));
    /// assert!(five.currency().is_mxn());
    /// ```
    #[inline]
    #[must_use]
    pub fn peso(amount: Decimal) -> Self {
        Self::new(amount, Currency::mxn())
    }

    /// Returns a new value scaled by `multiplier`, with the same currency.
    ///
    /// The receiver is unmodified. Overflow behavior follows [`Decimal`]
    /// multiplication.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneda::domain::value_objects::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let five = Money::dollar(Decimal::new(5, 0));
    /// assert_eq!(five.times(Decimal::new(3, 0)), Money::dollar(Decimal::new(15, 0)));
    /// assert_eq!(five, Money::dollar(Decimal::new(5, 0)));
    /// ```
    #[inline]
    #[must_use = "this returns the scaled value, without modifying the original"]
    pub fn times(&self, multiplier: Decimal) -> Self {
        Self::new(self.amount * multiplier, self.currency.clone())
    }

    /// Returns the numeric amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.times(rhs)
    }
}

impl Mul<Decimal> for &Money {
    type Output = Money;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.times(rhs)
    }
}
