//! # Catalog Gateway
//!
//! Read gateway that aggregates inventory, pricing and review data from
//! three independent, failure-prone upstreams into one composite product
//! view under a single shared deadline.
//!
//! The heart of the crate is the
//! [`ProductAggregator`](application::services::ProductAggregator): it
//! fans out one concurrent fetch per upstream, enforces one wall-clock
//! deadline across all of them, cancels the remaining fetches the moment
//! either the deadline elapses or any fetch fails non-recoverably, and
//! classifies the terminal outcome deterministically (timeout vs.
//! failure) before returning. The composite is all-or-nothing: either
//! every upstream answered in time, or the caller gets a classified
//! error and no partial data.
//!
//! ## Layers
//!
//! - [`domain`]: validated value objects and the [`Product`] composite
//! - [`application`]: the aggregation coordinator and its error taxonomy
//! - [`infrastructure`]: capability ports and reqwest-backed adapters
//! - [`api`]: axum REST surface with the 504/502 status mapping
//! - [`config`]: file + environment configuration
//!
//! ## Guarantees
//!
//! - One deadline governs the whole fan-out; per-call timeouts handed to
//!   upstream clients are advisory only.
//! - No spawned fetch ever outlives a call: every unit is cancelled and
//!   awaited before the coordinator returns.
//! - Timeout takes precedence over concurrent non-timeout failures, as
//!   a documented policy rather than a scheduling accident.
//!
//! [`Product`]: domain::entities::Product

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
