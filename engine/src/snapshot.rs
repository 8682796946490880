//! Snapshot types handed to the presentation layer.
//!
//! A snapshot is an immutable, self-contained view of the shop after a
//! transition: the filtered grid, the cart with computed totals, and the
//! overlay state. Renderers only ever see snapshots.

use crate::{error::Result, Cart, CartLine, Error, Price, Product, ProductId, Quantity};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One cart line with its computed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product: Arc<Product>,
    pub quantity: Quantity,
    /// `price * quantity`
    pub line_total: Price,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product: Arc::clone(&line.product),
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// The cart as the cart overlay shows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Lines in insertion order
    pub lines: Vec<CartLineView>,
    /// Sum of quantities
    pub total_items: u64,
    /// Sum of line totals
    pub total_price: Price,
}

impl CartView {
    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total_items: cart.total_item_count(),
            total_price: cart.total_price(),
        }
    }
}

/// A point-in-time view of the whole shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSnapshot {
    /// Current search query (possibly empty)
    pub query: String,
    /// Catalog products matching the query, in catalog order
    pub products: Vec<Arc<Product>>,
    /// True when a non-empty query matched nothing
    pub no_matches: bool,
    /// Cart contents and totals
    pub cart: CartView,
    /// Product shown in the detail overlay
    pub selected: Option<Arc<Product>>,
    /// Detail overlay visibility
    pub detail_open: bool,
    /// Cart overlay visibility
    pub cart_open: bool,
}

impl ShopSnapshot {
    /// The product the detail overlay should show, if it is visible at all.
    pub fn detail(&self) -> Option<&Arc<Product>> {
        if self.detail_open {
            self.selected.as_ref()
        } else {
            None
        }
    }

    /// Quantity of a product in the cart (0 when absent).
    pub fn quantity_in_cart(&self, id: ProductId) -> Quantity {
        self.cart
            .lines
            .iter()
            .find(|line| line.product.id == id)
            .map_or(0, |line| line.quantity)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gun() -> Arc<Product> {
        Arc::new(Product::new(1, "Portal Gun", "d", 10.0, "/g"))
    }

    fn empty_snapshot() -> ShopSnapshot {
        ShopSnapshot {
            query: String::new(),
            products: vec![gun()],
            no_matches: false,
            cart: CartView::default(),
            selected: None,
            detail_open: false,
            cart_open: false,
        }
    }

    #[test]
    fn cart_view_from_cart() {
        let mut cart = Cart::new();
        let gun = gun();
        cart.add(&gun);
        cart.add(&gun);

        let view = CartView::from(&cart);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.lines[0].line_total, 20.0);
        assert_eq!(view.total_items, 2);
        assert_eq!(view.total_price, 20.0);
    }

    #[test]
    fn empty_cart_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.is_empty());
        assert_eq!(view.total_items, 0);
        assert_eq!(view.total_price, 0.0);
    }

    #[test]
    fn detail_requires_open_overlay() {
        let mut snapshot = empty_snapshot();
        snapshot.selected = Some(gun());
        assert!(snapshot.detail().is_none());

        snapshot.detail_open = true;
        assert_eq!(snapshot.detail().unwrap().id, 1);

        snapshot.selected = None;
        assert!(snapshot.detail().is_none());
    }

    #[test]
    fn quantity_in_cart() {
        let mut snapshot = empty_snapshot();
        assert_eq!(snapshot.quantity_in_cart(1), 0);

        let mut cart = Cart::new();
        cart.add(&gun());
        snapshot.cart = CartView::from(&cart);
        assert_eq!(snapshot.quantity_in_cart(1), 1);
    }

    #[test]
    fn json_shape() {
        let snapshot = empty_snapshot();
        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(value["query"], json!(""));
        assert_eq!(value["noMatches"], json!(false));
        assert_eq!(value["detailOpen"], json!(false));
        assert_eq!(value["cartOpen"], json!(false));
        assert_eq!(value["selected"], json!(null));
        assert_eq!(value["products"][0]["imageUrl"], json!("/g"));
        assert_eq!(value["cart"]["totalItems"], json!(0));
    }

    #[test]
    fn json_roundtrip() {
        let mut snapshot = empty_snapshot();
        let mut cart = Cart::new();
        cart.add(&gun());
        snapshot.cart = CartView::from(&cart);
        snapshot.selected = Some(gun());

        let json = snapshot.to_json().unwrap();
        let restored: ShopSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, restored);
    }
}
