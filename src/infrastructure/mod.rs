//! # Infrastructure Layer
//!
//! Adapters for external systems.
//!
//! ## Modules
//!
//! - [`upstream`]: capability ports, the shared HTTP client and the
//!   reqwest-backed adapters for the inventory, pricing and reviews
//!   upstreams

pub mod upstream;
