//! # Product Composite
//!
//! The composite read model assembled from the three upstream values.
//!
//! A [`Product`] exists if and only if every constituent fetch completed
//! successfully before the shared deadline. There is no partial or
//! default-filled composite: the assembler is only reachable once all
//! three values are known-good, which is why it has no failure modes.

use crate::domain::value_objects::{Inventory, Price, ProductId, Reviews};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite product view: inventory, price and reviews for one identifier.
///
/// # Examples
///
/// ```
/// use catalog_gateway::domain::entities::Product;
/// use catalog_gateway::domain::value_objects::{Inventory, Price, ProductId, Reviews};
///
/// let product = Product::assemble(
///     ProductId::new("p1").unwrap(),
///     Inventory::new(3),
///     Price::new("USD", 9.99).unwrap(),
///     Reviews::new(vec!["ok".to_string()]),
/// );
///
/// assert_eq!(product.id().as_str(), "p1");
/// assert_eq!(product.inventory().available(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier echoed from the request.
    id: ProductId,
    /// Stock availability.
    inventory: Inventory,
    /// Current price.
    price: Price,
    /// Review texts in upstream order.
    reviews: Reviews,
}

impl Product {
    /// Assembles the composite from already-validated upstream values.
    ///
    /// Pure combination: the identifier is echoed unmodified and the
    /// review order is passed through unchanged.
    #[must_use]
    pub fn assemble(id: ProductId, inventory: Inventory, price: Price, reviews: Reviews) -> Self {
        Self {
            id,
            inventory,
            price,
            reviews,
        }
    }

    /// Returns the product identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the inventory snapshot.
    #[inline]
    #[must_use]
    pub fn inventory(&self) -> Inventory {
        self.inventory
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Returns the reviews in upstream order.
    #[inline]
    #[must_use]
    pub fn reviews(&self) -> &Reviews {
        &self.reviews
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product({}: {}, {}, {} reviews)",
            self.id,
            self.inventory,
            self.price,
            self.reviews.len()
        )
    }
}
