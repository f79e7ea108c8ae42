//! # Domain Layer
//!
//! Pure business types with no I/O or concurrency concerns.
//!
//! ## Modules
//!
//! - [`value_objects`]: validated immutable values ([`ProductId`],
//!   [`Inventory`], [`Price`], [`Reviews`])
//! - [`entities`]: the [`Product`] composite and its assembler
//! - [`errors`]: validation error taxonomy
//!
//! [`ProductId`]: value_objects::ProductId
//! [`Inventory`]: value_objects::Inventory
//! [`Price`]: value_objects::Price
//! [`Reviews`]: value_objects::Reviews
//! [`Product`]: entities::Product

pub mod entities;
pub mod errors;
pub mod value_objects;
