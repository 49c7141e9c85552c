//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{AddToCartInput, CartItemInput};
use crate::domain::entity::cart::{Cart, CartItem};
use crate::error::{CartError, CartResult};

// ============================================================================
// Add Cart
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub product_id: String,
    pub quantity: Option<i64>,
}

/// Full replacement of the caller's items; absent or null means empty
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartRequest {
    #[serde(default)]
    pub items: Option<Vec<CartItemRequest>>,
}

impl From<AddCartRequest> for AddToCartInput {
    fn from(req: AddCartRequest) -> Self {
        Self {
            items: req
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|item| CartItemInput {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Remove Cart Items
// ============================================================================

/// `productIds` is taken loosely so that any non-array value gets the same
/// error as an empty array
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveCartItemsRequest {
    #[serde(default)]
    pub product_ids: Option<Value>,
}

impl RemoveCartItemsRequest {
    pub fn into_product_ids(self) -> CartResult<Vec<String>> {
        match self.product_ids {
            Some(Value::Array(ids)) if !ids.is_empty() => ids
                .into_iter()
                .map(|id| match id {
                    Value::String(s) => Ok(s),
                    _ => Err(CartError::InvalidProductId),
                })
                .collect(),
            _ => Err(CartError::EmptyProductIds),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.cart_id.to_string(),
            user: cart.user_id.to_string(),
            items: cart.items,
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn remove(body: Value) -> CartResult<Vec<String>> {
        serde_json::from_value::<RemoveCartItemsRequest>(body)
            .unwrap()
            .into_product_ids()
    }

    #[test]
    fn test_product_ids_shape() {
        assert_eq!(remove(json!({ "productIds": ["a", "b"] })).unwrap(), vec!["a", "b"]);

        for body in [
            json!({}),
            json!({ "productIds": [] }),
            json!({ "productIds": "abc" }),
            json!({ "productIds": null }),
            json!({ "productIds": { "0": "a" } }),
        ] {
            assert!(matches!(remove(body), Err(CartError::EmptyProductIds)));
        }

        assert!(matches!(
            remove(json!({ "productIds": [42] })),
            Err(CartError::InvalidProductId)
        ));
    }

    #[test]
    fn test_missing_items_means_empty() {
        let req: AddCartRequest = serde_json::from_value(json!({})).unwrap();
        assert!(AddToCartInput::from(req).items.is_empty());
    }
}
