//! # moneda
//!
//! Immutable monetary value objects.
//!
//! A [`Money`] value pairs a [`rust_decimal::Decimal`] amount with a
//! [`Currency`] code. Two factories fix the currency ([`Money::dollar`],
//! [`Money::peso`]), [`Money::times`] scales the amount into a new value, and
//! equality compares amount and currency by value. Every operation is total:
//! nothing validates, fails, or mutates.
//!
//! # Examples
//!
//! ```
//! use moneda::{Currency, Money};
//! use rust_decimal::Decimal;
//!
//! let five = Money::dollar(Decimal::new(5, 0));
//! let ten = five.times(Decimal::new(2, 0));
//!
//! assert_eq!(ten, Money::dollar(Decimal::new(10, 0)));
//! assert_ne!(ten, Money::peso(Decimal::new(10, 0)));
//! assert_eq!(five.currency(), &Currency::usd());
//! ```

pub mod domain;

pub use domain::value_objects::{Currency, Money, ParseCurrencyError};
