//! Catalog gateway server binary.
//!
//! Wires configuration, the shared HTTP client, the three upstream
//! adapters and the aggregation coordinator into an axum server.

use anyhow::Context;
use catalog_gateway::api::rest::{AppState, create_router};
use catalog_gateway::application::services::ProductAggregator;
use catalog_gateway::config::AppConfig;
use catalog_gateway::infrastructure::upstream::http::{
    InventoryHttpClient, PricingHttpClient, ReviewsHttpClient,
};
use catalog_gateway::infrastructure::upstream::http_client::HttpClient;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let http = HttpClient::new(config.upstreams.request_timeout_ms)
        .context("failed to build HTTP client")?;
    let aggregator = Arc::new(ProductAggregator::new(
        Arc::new(InventoryHttpClient::new(
            http.clone(),
            config.upstreams.inventory_base_url.clone(),
        )),
        Arc::new(PricingHttpClient::new(
            http.clone(),
            config.upstreams.pricing_base_url.clone(),
        )),
        Arc::new(ReviewsHttpClient::new(
            http,
            config.upstreams.reviews_base_url.clone(),
        )),
    ));

    let state = Arc::new(AppState {
        aggregator,
        deadline: config.aggregation.deadline(),
    });
    let router = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "catalog gateway listening");
    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
