//! # Identifier Types
//!
//! String-based identifiers with validation.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque product identifier supplied by the caller.
///
/// The identifier is treated as opaque: it is validated to be non-empty
/// at construction and echoed verbatim into every upstream request and
/// the composite result, never normalized or rewritten.
///
/// # Examples
///
/// ```
/// use catalog_gateway::domain::value_objects::ProductId;
///
/// let id = ProductId::new("p1").unwrap();
/// assert_eq!(id.as_str(), "p1");
///
/// assert!(ProductId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProductId` if the identifier is empty
    /// or consists only of whitespace.
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_product_id(
                "identifier must not be empty",
            ));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
