//! # Price Value Object
//!
//! Currency-tagged price reported by the pricing upstream.
//!
//! # Examples
//!
//! ```
//! use catalog_gateway::domain::value_objects::Price;
//!
//! let price = Price::new("USD", 9.99).unwrap();
//! assert_eq!(price.currency(), "USD");
//!
//! assert!(Price::new("USD", -1.0).is_err());
//! assert!(Price::new("", 9.99).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount in a named currency.
///
/// # Invariants
///
/// - `currency` is a non-empty code
/// - `amount` is finite and non-negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Currency code, e.g. "USD".
    currency: String,
    /// Amount in the currency's major unit.
    amount: f64,
}

impl Price {
    /// Creates a validated price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCurrency` if the currency code is
    /// empty, or `DomainError::InvalidAmount` if the amount is negative,
    /// NaN or infinite.
    pub fn new(currency: impl Into<String>, amount: f64) -> DomainResult<Self> {
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(DomainError::invalid_currency("code must not be empty"));
        }
        if !amount.is_finite() {
            return Err(DomainError::invalid_amount("must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::invalid_amount("must be non-negative"));
        }
        Ok(Self { currency, amount })
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
