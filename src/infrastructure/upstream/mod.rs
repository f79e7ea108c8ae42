//! # Upstream Capabilities
//!
//! Ports and adapters for the three upstream data sources.
//!
//! The ports ([`InventoryClient`], [`PricingClient`], [`ReviewsClient`])
//! define the polymorphic fetch contract the aggregation coordinator
//! consumes; the HTTP adapters implement them over a shared reqwest
//! wrapper. Test doubles implement the same ports.
//!
//! [`InventoryClient`]: traits::InventoryClient
//! [`PricingClient`]: traits::PricingClient
//! [`ReviewsClient`]: traits::ReviewsClient

pub mod error;
pub mod http;
pub mod http_client;
pub mod traits;

pub use error::{UpstreamError, UpstreamResult};
pub use http::{InventoryHttpClient, PricingHttpClient, ReviewsHttpClient};
pub use http_client::HttpClient;
pub use traits::{InventoryClient, PricingClient, ReviewsClient};
