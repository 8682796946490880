//! Cart - product lines and their quantities.
//!
//! The cart keeps at most one line per product id, in the order products
//! were first added. Every operation is total: operating on a product with
//! no line is a no-op (except `add`, and `increment` under
//! [`IncrementPolicy::AddIfMissing`]).

use crate::{Error, Price, Product, ProductId, Quantity};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// One (product, quantity) pairing in the cart.
///
/// Quantity is always at least 1; a line that would drop to 0 is removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The product this line refers to (shared with the catalog)
    pub product: Arc<Product>,
    /// Number of units, never 0
    pub quantity: Quantity,
}

impl CartLine {
    fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Product id of this line.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// `price * quantity` for this line.
    pub fn line_total(&self) -> Price {
        self.product.line_total(self.quantity)
    }
}

/// What an operation did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LineChange {
    /// A new line was appended with quantity 1
    Inserted,
    /// An existing line now has this quantity
    Updated { quantity: Quantity },
    /// The line was removed
    Removed,
    /// Nothing changed
    Unchanged,
}

impl LineChange {
    /// Whether the cart was modified.
    pub fn is_change(&self) -> bool {
        !matches!(self, LineChange::Unchanged)
    }
}

/// How `increment` treats a product with no line in the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncrementPolicy {
    /// Incrementing an absent product does nothing (default)
    #[default]
    Strict,
    /// Incrementing an absent product behaves like `add`
    AddIfMissing,
}

impl std::str::FromStr for IncrementPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(IncrementPolicy::Strict),
            "add-if-missing" | "add_if_missing" => Ok(IncrementPolicy::AddIfMissing),
            other => Err(format!("unknown increment policy: {other}")),
        }
    }
}

/// The shopping cart.
///
/// Deserialization rejects zero quantities and repeated product ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCart")]
pub struct Cart {
    lines: Vec<CartLine>,
    increment_policy: IncrementPolicy,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCartLine {
    product: Arc<Product>,
    quantity: Quantity,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCart {
    lines: Vec<RawCartLine>,
    #[serde(default)]
    increment_policy: IncrementPolicy,
}

impl TryFrom<RawCart> for Cart {
    type Error = Error;

    fn try_from(raw: RawCart) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(raw.lines.len());
        let mut lines = Vec::with_capacity(raw.lines.len());

        for line in raw.lines {
            let id = line.product.id;
            if line.quantity == 0 {
                return Err(Error::InvalidCart(format!("product {id} has quantity 0")));
            }
            if !seen.insert(id) {
                return Err(Error::InvalidCart(format!(
                    "product {id} appears more than once"
                )));
            }
            lines.push(CartLine {
                product: line.product,
                quantity: line.quantity,
            });
        }

        Ok(Self {
            lines,
            increment_policy: raw.increment_policy,
        })
    }
}

impl Cart {
    /// Create an empty cart with the strict increment policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart with the given increment policy.
    pub fn with_policy(increment_policy: IncrementPolicy) -> Self {
        Self {
            lines: Vec::new(),
            increment_policy,
        }
    }

    /// The increment policy in effect.
    pub fn increment_policy(&self) -> IncrementPolicy {
        self.increment_policy
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product.id == id)
    }

    /// Add one unit of a product.
    ///
    /// Bumps the existing line, or appends a new line at the end.
    pub fn add(&mut self, product: &Arc<Product>) -> LineChange {
        match self.position(product.id) {
            Some(i) => {
                let line = &mut self.lines[i];
                line.quantity = line.quantity.saturating_add(1);
                LineChange::Updated {
                    quantity: line.quantity,
                }
            }
            None => {
                self.lines.push(CartLine::new(Arc::clone(product)));
                LineChange::Inserted
            }
        }
    }

    /// Increment the quantity of an existing line.
    ///
    /// A product without a line is left alone under
    /// [`IncrementPolicy::Strict`] and added under
    /// [`IncrementPolicy::AddIfMissing`].
    pub fn increment(&mut self, product: &Arc<Product>) -> LineChange {
        match (self.position(product.id), self.increment_policy) {
            (Some(_), _) | (None, IncrementPolicy::AddIfMissing) => self.add(product),
            (None, IncrementPolicy::Strict) => LineChange::Unchanged,
        }
    }

    /// Decrement the quantity of a line, removing it when it reaches zero.
    pub fn decrement(&mut self, product: &Product) -> LineChange {
        let Some(i) = self.position(product.id) else {
            return LineChange::Unchanged;
        };

        if self.lines[i].quantity > 1 {
            let line = &mut self.lines[i];
            line.quantity -= 1;
            LineChange::Updated {
                quantity: line.quantity,
            }
        } else {
            self.lines.remove(i);
            LineChange::Removed
        }
    }

    /// Remove the line for a product id.
    pub fn remove(&mut self, id: ProductId) -> LineChange {
        match self.position(id) {
            Some(i) => {
                self.lines.remove(i);
                LineChange::Removed
            }
            None => LineChange::Unchanged,
        }
    }

    /// Empty the cart, returning the lines that were in it.
    pub fn clear(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }

    /// Get the line for a product id.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    /// Quantity of a product in the cart (0 when absent).
    pub fn quantity_of(&self, id: ProductId) -> Quantity {
        self.get(id).map_or(0, |line| line.quantity)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
