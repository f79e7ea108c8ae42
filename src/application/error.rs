//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures during use case execution: upstream
//! aggregation outcomes, request validation failures and internal
//! errors. The REST layer owns the mapping to HTTP statuses.
//!
//! # Examples
//!
//! ```
//! use catalog_gateway::application::error::ApplicationError;
//!
//! let err = ApplicationError::validation("identifier must not be empty");
//! assert!(err.is_validation());
//! ```

use crate::application::services::AggregationError;
use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
///
/// Wraps aggregation and validation errors with application-specific
/// context for use case execution failures.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Aggregation outcome from the coordinator.
    #[error("aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is the aggregate timeout outcome.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Aggregation(e) if e.is_timeout())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        Self::Validation(error.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::upstream::error::UpstreamError;

    #[test]
    fn validation_error() {
        let err = ApplicationError::validation("identifier must not be empty");
        assert!(err.is_validation());
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("identifier"));
    }

    #[test]
    fn from_aggregation_timeout() {
        let err: ApplicationError = AggregationError::UpstreamTimeout.into();
        assert!(err.is_timeout());
    }

    #[test]
    fn from_aggregation_failure_is_not_timeout() {
        let err: ApplicationError =
            AggregationError::UpstreamFailure(UpstreamError::connection("refused")).into();
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn from_domain_error_is_validation() {
        let err: ApplicationError = DomainError::invalid_product_id("empty").into();
        assert!(err.is_validation());
    }

    #[test]
    fn internal_error() {
        let err = ApplicationError::internal("wiring failed");
        assert!(!err.is_validation());
        assert!(err.to_string().contains("wiring failed"));
    }
}
