//! # Domain Errors
//!
//! Validation errors for domain value objects.
//!
//! Every value object validates its invariants at construction and
//! reports violations through [`DomainError`]. Values that exist are
//! therefore always valid.
//!
//! # Examples
//!
//! ```
//! use catalog_gateway::domain::errors::DomainError;
//!
//! let error = DomainError::invalid_product_id("identifier must not be empty");
//! assert!(error.to_string().contains("product id"));
//! ```

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Product identifier failed validation.
    #[error("invalid product id: {message}")]
    InvalidProductId {
        /// Error message.
        message: String,
    },

    /// Currency code failed validation.
    #[error("invalid currency: {message}")]
    InvalidCurrency {
        /// Error message.
        message: String,
    },

    /// Price amount failed validation.
    #[error("invalid amount: {message}")]
    InvalidAmount {
        /// Error message.
        message: String,
    },
}

impl DomainError {
    /// Creates an invalid product id error.
    #[must_use]
    pub fn invalid_product_id(message: impl Into<String>) -> Self {
        Self::InvalidProductId {
            message: message.into(),
        }
    }

    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(message: impl Into<String>) -> Self {
        Self::InvalidCurrency {
            message: message.into(),
        }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
