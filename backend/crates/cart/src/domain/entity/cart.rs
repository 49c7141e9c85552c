//! Cart Entity
//!
//! One cart per user. Item order is the order the client sent.

use chrono::{DateTime, Utc};
use kernel::id::{CartId, ProductId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::quantity::Quantity;

/// A product reference with a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub cart_id: CartId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Create a new cart for `user_id`
    pub fn new(user_id: UserId, items: Vec<CartItem>) -> Self {
        let now = Utc::now();

        Self {
            cart_id: CartId::new(),
            user_id,
            items,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every item
    pub fn replace_items(&mut self, items: Vec<CartItem>, now: DateTime<Utc>) {
        self.items = items;
        self.updated_at = now;
    }

    /// Drop every item whose product is in `product_ids`, keeping the order
    /// of the rest
    pub fn remove_products(&mut self, product_ids: &[ProductId], now: DateTime<Utc>) {
        self.items.retain(|item| !product_ids.contains(&item.product_id));
        self.updated_at = now;
    }
}
