//! # Upstream Errors
//!
//! Error types for upstream capability calls.
//!
//! Each capability classifies its own failures into these variants; the
//! aggregation coordinator treats the error as opaque apart from the
//! [`UpstreamError::is_timeout`] classification. Nothing downstream
//! inspects error message strings.
//!
//! # Examples
//!
//! ```
//! use catalog_gateway::infrastructure::upstream::error::UpstreamError;
//!
//! let error = UpstreamError::timeout_with_duration("request timed out", 200);
//! assert!(error.is_timeout());
//!
//! let error = UpstreamError::unexpected_status(500, "internal server error");
//! assert!(!error.is_timeout());
//! ```

use thiserror::Error;

/// Error type for upstream capability operations.
///
/// Represents failures while fetching one constituent of the composite
/// result, including transport problems, bad statuses and payloads that
/// fail domain validation.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// Request timed out inside the capability.
    #[error("upstream timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds, when known.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("upstream connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("upstream decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// Response decoded but failed domain validation.
    #[error("upstream invalid payload: {message}")]
    InvalidPayload {
        /// Error message.
        message: String,
    },

    /// Internal capability error.
    #[error("upstream internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl UpstreamError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with the timeout duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an unexpected status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an invalid payload error.
    #[must_use]
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this failure is timeout-classified.
    ///
    /// This is the one distinction the coordinator relies on: a
    /// timeout-classified upstream failure is reported to the caller as
    /// an aggregate timeout rather than an upstream failure.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns the HTTP status code, if this error carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
