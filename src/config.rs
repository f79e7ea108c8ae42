//! # Configuration
//!
//! Application configuration loaded from an optional file plus
//! environment overrides (12-factor style).
//!
//! Environment variables use the `CATALOG` prefix with `__` as the
//! section separator, e.g. `CATALOG__UPSTREAMS__PRICING_BASE_URL` or
//! `CATALOG__AGGREGATION__DEADLINE_MS`.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying loader error.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Server listen settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen host.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Upstream endpoints and transport settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamsConfig {
    /// Base URL of the inventory upstream.
    pub inventory_base_url: String,
    /// Base URL of the pricing upstream.
    pub pricing_base_url: String,
    /// Base URL of the reviews upstream.
    pub reviews_base_url: String,
    /// Default per-request timeout for the shared HTTP client, in
    /// milliseconds. Advisory; the aggregation deadline is authoritative.
    pub request_timeout_ms: u64,
}

impl Default for UpstreamsConfig {
    fn default() -> Self {
        Self {
            inventory_base_url: "http://localhost:8081".to_string(),
            pricing_base_url: "http://localhost:8082".to_string(),
            reviews_base_url: "http://localhost:8083".to_string(),
            request_timeout_ms: 500,
        }
    }
}

/// Aggregation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Shared deadline for one composite fetch, in milliseconds.
    pub deadline_ms: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self { deadline_ms: 200 }
    }
}

impl AggregationConfig {
    /// Returns the shared deadline as a duration.
    #[must_use]
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server listen settings.
    pub server: ServerConfig,
    /// Upstream endpoints.
    pub upstreams: UpstreamsConfig,
    /// Aggregation settings.
    pub aggregation: AggregationConfig,
}

impl AppConfig {
    /// Loads configuration from `config/default.toml` (optional) with
    /// `CATALOG__*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source cannot be read or a value
    /// cannot be deserialized.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("CATALOG").separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
