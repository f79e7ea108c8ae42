//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /api/v1/products/{id}` - Fetch the composite product view
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Status Mapping
//!
//! - 200 - all upstreams answered within the shared deadline
//! - 400 - invalid product identifier
//! - 502 - an upstream failed for a reason other than timeout
//! - 504 - the shared deadline elapsed
//!
//! # Usage
//!
//! ```ignore
//! use catalog_gateway::api::rest::{AppState, create_router};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState { aggregator, deadline });
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, ErrorResponse, HealthResponse, ProductResponse};
pub use routes::create_router;
