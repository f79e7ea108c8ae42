//! # HTTP Upstream Adapters
//!
//! Reqwest-backed implementations of the three capability ports.
//!
//! Each adapter owns a base URL and a shared [`HttpClient`], hits one
//! endpoint (`GET {base}/inventory/{id}`, `GET {base}/pricing/{id}`,
//! `GET {base}/reviews/{id}`) and maps the wire payload into the
//! corresponding domain value. Payloads that decode but fail domain
//! validation surface as `UpstreamError::InvalidPayload`.

use crate::domain::value_objects::{Inventory, Price, ProductId, Reviews};
use crate::infrastructure::upstream::error::{UpstreamError, UpstreamResult};
use crate::infrastructure::upstream::http_client::HttpClient;
use crate::infrastructure::upstream::traits::{InventoryClient, PricingClient, ReviewsClient};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Wire payload of the inventory upstream.
#[derive(Debug, Deserialize)]
struct InventoryPayload {
    available: u32,
}

/// Wire payload of the pricing upstream.
#[derive(Debug, Deserialize)]
struct PricingPayload {
    currency: String,
    amount: f64,
}

/// Wire payload of the reviews upstream.
///
/// A missing `reviews` key is treated as an empty list.
#[derive(Debug, Deserialize)]
struct ReviewsPayload {
    #[serde(default)]
    reviews: Vec<String>,
}

fn endpoint(base_url: &str, segment: &str, id: &ProductId) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), segment, id)
}

/// HTTP adapter for the inventory upstream.
#[derive(Debug, Clone)]
pub struct InventoryHttpClient {
    http: HttpClient,
    base_url: String,
}

impl InventoryHttpClient {
    /// Creates an inventory adapter for the given base URL.
    #[must_use]
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl InventoryClient for InventoryHttpClient {
    async fn get(&self, id: &ProductId, timeout: Option<Duration>) -> UpstreamResult<Inventory> {
        let url = endpoint(&self.base_url, "inventory", id);
        let payload: InventoryPayload = self.http.get(&url, timeout).await?;
        Ok(Inventory::new(payload.available))
    }
}

/// HTTP adapter for the pricing upstream.
#[derive(Debug, Clone)]
pub struct PricingHttpClient {
    http: HttpClient,
    base_url: String,
}

impl PricingHttpClient {
    /// Creates a pricing adapter for the given base URL.
    #[must_use]
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PricingClient for PricingHttpClient {
    async fn get(&self, id: &ProductId, timeout: Option<Duration>) -> UpstreamResult<Price> {
        let url = endpoint(&self.base_url, "pricing", id);
        let payload: PricingPayload = self.http.get(&url, timeout).await?;
        Price::new(payload.currency, payload.amount)
            .map_err(|e| UpstreamError::invalid_payload(e.to_string()))
    }
}

/// HTTP adapter for the reviews upstream.
#[derive(Debug, Clone)]
pub struct ReviewsHttpClient {
    http: HttpClient,
    base_url: String,
}

impl ReviewsHttpClient {
    /// Creates a reviews adapter for the given base URL.
    #[must_use]
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ReviewsClient for ReviewsHttpClient {
    async fn get(&self, id: &ProductId, timeout: Option<Duration>) -> UpstreamResult<Reviews> {
        let url = endpoint(&self.base_url, "reviews", id);
        let payload: ReviewsPayload = self.http.get(&url, timeout).await?;
        Ok(Reviews::new(payload.reviews))
    }
}
