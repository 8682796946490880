//! Catalog - the immutable, ordered list of products.
//!
//! The catalog is built once at startup and never mutated afterwards.
//! Products are handed out as `Arc<Product>` so the cart and snapshots can
//! reference them without copying.

use crate::{error::Result, Error, Product, ProductId};
use std::collections::HashMap;
use std::sync::Arc;

/// An ordered, immutable sequence of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    /// Position of each product id in `products`
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products, keeping their order.
    ///
    /// Rejects duplicate ids and negative or non-finite prices.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());
        let mut shared = Vec::with_capacity(products.len());

        for (position, product) in products.into_iter().enumerate() {
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(Error::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if index.insert(product.id, position).is_some() {
                return Err(Error::DuplicateProductId(product.id));
            }
            shared.push(Arc::new(product));
        }

        Ok(Self {
            products: shared,
            index,
        })
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| Error::InvalidCatalog(e.to_string()))?;
        Self::new(products)
    }

    /// The built-in demo catalog.
    pub fn seed() -> Self {
        let products = vec![
            Product::new(
                1,
                "Portal Gun (used)",
                "Slightly scratched, portal fluid at 37%. No returns. May smell of adventure and other dimensions.",
                9999.99,
                "/img/products/portal-gun.webp",
            ),
            Product::new(
                2,
                "Standard Plumbus",
                "Every home should have a plumbus. Comes with schleem, grumbo and fleeb.",
                6.5,
                "/img/products/plumbus.webp",
            ),
            Product::new(
                3,
                "Meeseeks Box",
                "Press the button and a Meeseeks appears, ready to fulfil a single request.",
                19.99,
                "/img/products/meeseeks-box.webp",
            ),
            Product::new(
                4,
                "Concentrated Dark Matter",
                "Ideal fuel for your spaceship. Do not ingest.",
                850.0,
                "/img/products/dark-matter.webp",
            ),
            Product::new(
                5,
                "Butter Robot",
                "Its only purpose is to pass the butter. It knows, and it is not happy about it.",
                25.5,
                "/img/products/butter-robot.webp",
            ),
            Product::new(
                6,
                "Dog Mind-Reading Helmet",
                "Finally find out where your dog hid your slippers.",
                120.0,
                "/img/products/dog-helmet.webp",
            ),
            Product::new(
                7,
                "Eyeholes Cereal",
                "A balanced breakfast, guarded by the Eyehole Man.",
                4.2,
                "/img/products/eyeholes.webp",
            ),
            Product::new(
                8,
                "Microverse Battery",
                "A whole civilization powering your car. Please do not visit.",
                4999.0,
                "/img/products/microverse-battery.webp",
            ),
        ];

        let index = products
            .iter()
            .enumerate()
            .map(|(position, p)| (p.id, position))
            .collect();

        Self {
            products: products.into_iter().map(Arc::new).collect(),
            index,
        }
    }

    /// Get a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Check if a product id exists.
    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
