//! # Currency Code
//!
//! String-backed currency identifier for monetary values.
//!
//! This module provides:
//! - [`Currency`] - A short currency code stored verbatim
//! - [`ParseCurrencyError`] - Error type for parsing currency codes
//!
//! # Examples
//!
//! ```
//! use moneda::domain::value_objects::Currency;
//!
//! let usd = Currency::usd();
//! assert_eq!(usd.as_str(), "USD");
//! assert!(usd.is_usd());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ISO-style code of the US dollar.
pub const USD: &str = "USD";

/// ISO-style code of the Mexican peso.
pub const MXN: &str = "MXN";

/// A short currency code.
///
/// The code is stored verbatim: any string is a valid `Currency`, and no
/// operation validates it against a known set. The [`Currency::usd`] and
/// [`Currency::mxn`] constructors produce the only two codes the
/// [`Money`](crate::domain::value_objects::Money) factories ever use.
///
/// Equality is plain string equality, so `Currency::usd()` differs from
/// `Currency::mxn()` and from any other code.
///
/// # Examples
///
/// ```
/// use moneda::domain::value_objects::Currency;
///
/// let usd = Currency::usd();
/// let mxn = Currency::mxn();
/// assert_ne!(usd, mxn);
///
/// // Arbitrary codes are accepted without validation.
/// let other = Currency::new("CHF");
/// assert_eq!(other.as_str(), "CHF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from an arbitrary code, stored verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneda::domain::value_objects::Currency;
    ///
    /// let eur = Currency::new("EUR");
    /// assert_eq!(eur.as_str(), "EUR");
    /// ```
    #[inline]
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the US dollar currency (`"USD"`).
    #[inline]
    #[must_use]
    pub fn usd() -> Self {
        Self(USD.to_string())
    }

    /// Returns the Mexican peso currency (`"MXN"`).
    #[inline]
    #[must_use]
    pub fn mxn() -> Self {
        Self(MXN.to_string())
    }

    /// Returns the currency code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the US dollar.
    #[inline]
    #[must_use]
    pub fn is_usd(&self) -> bool {
        self.0 == USD
    }

    /// Returns true if this is the Mexican peso.
    #[inline]
    #[must_use]
    pub fn is_mxn(&self) -> bool {
        self.0 == MXN
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Error type for parsing a currency code from text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseCurrencyError {
    /// The code was empty or all whitespace.
    #[error("empty currency code")]
    Empty,
}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseCurrencyError::Empty);
        }
        Ok(Self::new(trimmed))
    }
}
