//! # Upstream Capability Ports
//!
//! Port definitions for the three upstream capabilities.
//!
//! Each capability is a polymorphic fetch: given an identifier it either
//! produces its value or fails with an [`UpstreamError`]. Implementations
//! are external collaborators (HTTP clients, test doubles); the
//! aggregation coordinator treats them as opaque.
//!
//! # Timeouts
//!
//! The `timeout` argument is advisory. An implementation should attempt
//! to honor it internally (for example as a per-request transport
//! timeout), but the coordinator never relies on it: the coordinator's
//! own shared deadline is authoritative and is enforced by cancelling
//! the in-flight call.
//!
//! # Cancellation
//!
//! Implementations must suspend only at `.await` points so that the
//! coordinator can cancel an in-flight fetch promptly.
//!
//! # Examples
//!
//! ```ignore
//! use catalog_gateway::infrastructure::upstream::traits::InventoryClient;
//!
//! #[derive(Debug)]
//! struct MyInventoryClient { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl InventoryClient for MyInventoryClient {
//!     // ... implement get
//! }
//! ```

use crate::domain::value_objects::{Inventory, Price, ProductId, Reviews};
use crate::infrastructure::upstream::error::UpstreamResult;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Port for the inventory upstream.
#[async_trait]
pub trait InventoryClient: Send + Sync + fmt::Debug {
    /// Fetches stock availability for a product.
    ///
    /// # Errors
    ///
    /// - `UpstreamError::Timeout` - the capability's own timeout fired
    /// - `UpstreamError::Connection` - transport failure
    /// - `UpstreamError::UnexpectedStatus` - non-success response
    /// - `UpstreamError::Decode` / `InvalidPayload` - unusable body
    async fn get(&self, id: &ProductId, timeout: Option<Duration>) -> UpstreamResult<Inventory>;
}

/// Port for the pricing upstream.
#[async_trait]
pub trait PricingClient: Send + Sync + fmt::Debug {
    /// Fetches the current price for a product.
    ///
    /// # Errors
    ///
    /// - `UpstreamError::Timeout` - the capability's own timeout fired
    /// - `UpstreamError::Connection` - transport failure
    /// - `UpstreamError::UnexpectedStatus` - non-success response
    /// - `UpstreamError::Decode` / `InvalidPayload` - unusable body
    async fn get(&self, id: &ProductId, timeout: Option<Duration>) -> UpstreamResult<Price>;
}

/// Port for the reviews upstream.
#[async_trait]
pub trait ReviewsClient: Send + Sync + fmt::Debug {
    /// Fetches review texts for a product, in upstream order.
    ///
    /// # Errors
    ///
    /// - `UpstreamError::Timeout` - the capability's own timeout fired
    /// - `UpstreamError::Connection` - transport failure
    /// - `UpstreamError::UnexpectedStatus` - non-success response
    /// - `UpstreamError::Decode` / `InvalidPayload` - unusable body
    async fn get(&self, id: &ProductId, timeout: Option<Duration>) -> UpstreamResult<Reviews>;
}
