//! Order receipts issued at checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_engine::Order;
use uuid::Uuid;

/// A finalized order stamped with an order number and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Unique order number
    pub order_number: Uuid,
    /// When the order was placed
    pub placed_at: DateTime<Utc>,
    /// What was ordered
    pub order: Order,
}

impl Receipt {
    /// Issue a receipt for an order, numbered and timestamped now.
    pub fn issue(order: Order) -> Self {
        Self::with_number(order, Uuid::new_v4(), Utc::now())
    }

    /// Build a receipt with a known number and time.
    pub fn with_number(order: Order, order_number: Uuid, placed_at: DateTime<Utc>) -> Self {
        Self {
            order_number,
            placed_at,
            order,
        }
    }

    /// Short order reference shown to the customer.
    pub fn short_number(&self) -> String {
        let simple = self.order_number.simple().to_string();
        simple[..8].to_uppercase()
    }
}
