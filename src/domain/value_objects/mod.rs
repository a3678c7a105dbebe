//! # Value Objects
//!
//! Immutable types with value semantics.
//!
//! ## Monetary Types
//!
//! - [`Money`]: Decimal amount paired with a currency code
//! - [`Currency`]: String-backed currency code, stored verbatim
//!
//! ## Errors
//!
//! - [`ParseCurrencyError`]: Failure parsing a currency code from text

pub mod currency;
pub mod money;

pub use currency::{Currency, ParseCurrencyError};
pub use money::Money;
