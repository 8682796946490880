//! Error types for the Storefront engine.

use crate::{Price, ProductId};
use thiserror::Error;

/// All possible errors from the Storefront engine.
///
/// Cart and coordinator operations on a known product never fail. Errors
/// only arise at the boundaries: resolving ids from intents and loading
/// catalogs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    // Lookup errors
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    // Catalog errors
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    #[error("invalid price for product {id}: {price}")]
    InvalidPrice { id: ProductId, price: Price },

    // State errors
    #[error("invalid cart: {0}")]
    InvalidCart(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
