//! # REST Handlers
//!
//! Request handlers and response DTOs for the REST API.
//!
//! This layer owns the mapping from aggregation outcomes to HTTP
//! statuses: a shared-deadline timeout maps to 504 Gateway Timeout and
//! any other upstream failure to 502 Bad Gateway, so callers can tell
//! "retry later" apart from "fix upstream".

use crate::application::error::ApplicationError;
use crate::application::services::ProductAggregator;
use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Shared state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The aggregation coordinator.
    pub aggregator: Arc<ProductAggregator>,
    /// Shared deadline applied to every product fetch.
    pub deadline: Duration,
}

/// Response body for a product fetch.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    /// Identifier echoed from the request.
    pub id: String,
    /// Units available.
    pub inventory: u32,
    /// Price amount.
    pub price: f64,
    /// Price currency code.
    pub currency: String,
    /// Review texts in upstream order.
    pub reviews: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let inventory = product.inventory().available();
        let price = product.price().amount();
        let currency = product.price().currency().to_string();
        Self {
            id: product.id().as_str().to_string(),
            inventory,
            price,
            currency,
            reviews: product.reviews().clone().into_inner(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error class.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Health check response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// When the check was answered.
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Aggregation(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Aggregation(_) => StatusCode::BAD_GATEWAY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("error")
                .to_ascii_lowercase()
                .replace(' ', "_"),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `GET /api/v1/products/{id}`
///
/// Fetches the composite product view under the configured deadline.
///
/// # Errors
///
/// - 400 if the identifier is empty
/// - 504 if the shared deadline elapsed
/// - 502 if an upstream failed for any other reason
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApplicationError> {
    let id = ProductId::new(id)?;
    let product = state.aggregator.fetch(&id, state.deadline).await?;
    Ok(Json(product.into()))
}

/// `GET /api/v1/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}
