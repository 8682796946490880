//! Product records held by the catalog.

use crate::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A purchasable product.
///
/// Products are immutable once loaded into a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog
    pub id: ProductId,
    /// Display name, also the field searched by the filter
    pub name: String,
    /// Long-form description shown in the detail overlay
    pub description: String,
    /// Unit price, non-negative
    pub price: Price,
    /// Reference to the product image
    pub image_url: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
        }
    }

    /// Check whether the name contains an already lowercased needle.
    pub(crate) fn name_contains_folded(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Price of `quantity` units.
    pub fn line_total(&self, quantity: crate::Quantity) -> Price {
        self.price * f64::from(quantity)
    }
}
