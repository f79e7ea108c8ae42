//! # Reviews Value Object
//!
//! Ordered review texts reported by the reviews upstream.
//!
//! The sequence is preserved verbatim: reviews are never reordered,
//! deduplicated or truncated on the way through the gateway.

use serde::{Deserialize, Serialize};

/// An ordered, possibly empty list of review texts.
///
/// # Examples
///
/// ```
/// use catalog_gateway::domain::value_objects::Reviews;
///
/// let reviews = Reviews::new(vec!["ok".to_string(), "great".to_string()]);
/// assert_eq!(reviews.len(), 2);
/// assert_eq!(reviews.as_slice(), ["ok", "great"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reviews(Vec<String>);

impl Reviews {
    /// Creates a review list, preserving the given order.
    #[must_use]
    pub fn new(reviews: Vec<String>) -> Self {
        Self(reviews)
    }

    /// Creates an empty review list.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of reviews.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no reviews.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the reviews as a slice, in upstream order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list, returning the underlying vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Iterates over the review texts in upstream order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Reviews {
    fn from(reviews: Vec<String>) -> Self {
        Self::new(reviews)
    }
}
