//! # REST Routes
//!
//! Router assembly for the REST API.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Creates the REST router with all routes and middleware.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/products/{id}", get(handlers::get_product))
        .route("/api/v1/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}
