//! Intent types for expressing user actions.
//!
//! The presentation layer never mutates shop state directly. It turns user
//! input into intents and hands them to [`Shop::dispatch`](crate::Shop::dispatch).

use crate::ProductId;
use serde::{Deserialize, Serialize};

/// A user action the shop can handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    /// The search box text changed
    SearchChanged { query: String },
    /// Add one unit of a product to the cart
    AddToCart { product_id: ProductId },
    /// Add the product shown in the detail overlay, then close the overlay
    AddSelected,
    /// Open the detail overlay for a product
    ViewDetails { product_id: ProductId },
    /// Increment a cart line
    Increment { product_id: ProductId },
    /// Decrement a cart line
    Decrement { product_id: ProductId },
    /// Remove a cart line
    RemoveFromCart { product_id: ProductId },
    /// Show the cart overlay
    OpenCart,
    /// Hide the cart overlay
    CloseCart,
    /// Hide the detail overlay
    CloseDetail,
    /// Finalize the order and clear the cart
    Checkout,
}

impl Intent {
    /// The product this intent targets, if any.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Intent::AddToCart { product_id }
            | Intent::ViewDetails { product_id }
            | Intent::Increment { product_id }
            | Intent::Decrement { product_id }
            | Intent::RemoveFromCart { product_id } => Some(*product_id),
            Intent::SearchChanged { .. }
            | Intent::AddSelected
            | Intent::OpenCart
            | Intent::CloseCart
            | Intent::CloseDetail
            | Intent::Checkout => None,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SearchChanged { .. } => "searchChanged",
            Intent::AddToCart { .. } => "addToCart",
            Intent::AddSelected => "addSelected",
            Intent::ViewDetails { .. } => "viewDetails",
            Intent::Increment { .. } => "increment",
            Intent::Decrement { .. } => "decrement",
            Intent::RemoveFromCart { .. } => "removeFromCart",
            Intent::OpenCart => "openCart",
            Intent::CloseCart => "closeCart",
            Intent::CloseDetail => "closeDetail",
            Intent::Checkout => "checkout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_id() {
        assert_eq!(Intent::AddToCart { product_id: 3 }.product_id(), Some(3));
        assert_eq!(Intent::RemoveFromCart { product_id: 9 }.product_id(), Some(9));
        assert_eq!(Intent::Checkout.product_id(), None);
        assert_eq!(
            Intent::SearchChanged {
                query: "plum".into()
            }
            .product_id(),
            None
        );
    }

    #[test]
    fn wire_format() {
        let intent = Intent::AddToCart { product_id: 7 };
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({"type": "addToCart", "productId": 7})
        );

        let parsed: Intent = serde_json::from_value(json!({"type": "openCart"})).unwrap();
        assert_eq!(parsed, Intent::OpenCart);

        let parsed: Intent =
            serde_json::from_value(json!({"type": "searchChanged", "query": "gun"})).unwrap();
        assert_eq!(
            parsed,
            Intent::SearchChanged {
                query: "gun".into()
            }
        );
    }

    #[test]
    fn name_matches_wire_tag() {
        let intents = vec![
            Intent::SearchChanged { query: String::new() },
            Intent::AddToCart { product_id: 1 },
            Intent::AddSelected,
            Intent::ViewDetails { product_id: 1 },
            Intent::Increment { product_id: 1 },
            Intent::Decrement { product_id: 1 },
            Intent::RemoveFromCart { product_id: 1 },
            Intent::OpenCart,
            Intent::CloseCart,
            Intent::CloseDetail,
            Intent::Checkout,
        ];

        for intent in intents {
            let value = serde_json::to_value(&intent).unwrap();
            assert_eq!(value["type"], intent.name());
        }
    }

    #[test]
    fn reject_unknown_type() {
        let result: Result<Intent, _> = serde_json::from_value(json!({"type": "teleport"}));
        assert!(result.is_err());
    }
}
