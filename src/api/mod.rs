//! # API Layer
//!
//! Network-facing surfaces.
//!
//! ## Modules
//!
//! - [`rest`]: axum REST endpoints and their status mapping

pub mod rest;
