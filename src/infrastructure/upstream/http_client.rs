//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for upstream adapters.
//!
//! Provides:
//! - A configurable default timeout
//! - Per-request advisory timeout overrides
//! - JSON deserialization
//! - Structured [`UpstreamError`] mapping (no string matching)
//!
//! # Examples
//!
//! ```ignore
//! use catalog_gateway::infrastructure::upstream::http_client::HttpClient;
//!
//! let client = HttpClient::new(500)?;
//! let payload: MyPayload = client.get("http://inventory.svc/inventory/p1", None).await?;
//! ```

use crate::infrastructure::upstream::error::{UpstreamError, UpstreamResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for upstream adapters.
///
/// Wraps a shared `reqwest::Client` with a default timeout and maps
/// transport failures into the upstream error taxonomy. The mapping is
/// structural: reqwest's own error classification decides whether a
/// failure is timeout-classified.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Default request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified default timeout.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Internal` if the client cannot be built.
    pub fn new(timeout_ms: u64) -> UpstreamResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                UpstreamError::internal(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the default timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request and deserializes the JSON response.
    ///
    /// When `timeout` is given it overrides the client default for this
    /// request only; this is how the coordinator's advisory per-call
    /// timeout reaches the transport.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Timeout` if the request times out,
    /// `UpstreamError::Connection` on transport failures,
    /// `UpstreamError::UnexpectedStatus` for non-success statuses and
    /// `UpstreamError::Decode` if the body cannot be parsed.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> UpstreamResult<T> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(&e))?;

        Self::handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> UpstreamResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                UpstreamError::decode(format!("failed to parse response body: {}", e))
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Self::map_status_error(status, &body))
        }
    }

    /// Maps a reqwest error to an UpstreamError.
    fn map_reqwest_error(&self, error: &reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::timeout_with_duration("request timed out", self.timeout_ms)
        } else if error.is_connect() {
            UpstreamError::connection(format!("connection failed: {}", error))
        } else {
            UpstreamError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps a non-success HTTP status to an UpstreamError.
    fn map_status_error(status: StatusCode, body: &str) -> UpstreamError {
        UpstreamError::unexpected_status(status.as_u16(), body.trim().to_string())
    }
}
