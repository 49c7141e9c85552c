//! In-Memory Repository

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{ProductId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::cart::{Cart, CartItem};
use crate::domain::repository::CartRepository;
use crate::error::CartResult;

/// In-memory cart repository, keyed by owner
#[derive(Clone, Default)]
pub struct InMemoryCartRepository {
    carts: Arc<RwLock<HashMap<UserId, Cart>>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartRepository for InMemoryCartRepository {
    async fn upsert_items(&self, user_id: &UserId, items: &[CartItem]) -> CartResult<Cart> {
        let mut carts = self.carts.write().await;

        let cart = carts
            .entry(*user_id)
            .and_modify(|cart| cart.replace_items(items.to_vec(), Utc::now()))
            .or_insert_with(|| Cart::new(*user_id, items.to_vec()));

        Ok(cart.clone())
    }

    async fn remove_items(
        &self,
        user_id: &UserId,
        product_ids: &[ProductId],
    ) -> CartResult<Option<Cart>> {
        let mut carts = self.carts.write().await;

        Ok(carts.get_mut(user_id).map(|cart| {
            cart.remove_products(product_ids, Utc::now());
            cart.clone()
        }))
    }
}
