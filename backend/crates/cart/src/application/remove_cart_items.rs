//! Remove Cart Items Use Case

use std::sync::Arc;

use auth::User;
use kernel::id::ProductId;

use crate::domain::entity::cart::Cart;
use crate::domain::repository::CartRepository;
use crate::error::{CartError, CartResult};

pub struct RemoveCartItemsInput {
    pub product_ids: Vec<String>,
}

pub struct RemoveCartItemsUseCase<R>
where
    R: CartRepository,
{
    repo: Arc<R>,
}

impl<R> RemoveCartItemsUseCase<R>
where
    R: CartRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, actor: &User, input: RemoveCartItemsInput) -> CartResult<Cart> {
        if input.product_ids.is_empty() {
            return Err(CartError::EmptyProductIds);
        }

        let product_ids = input
            .product_ids
            .iter()
            .map(|id| ProductId::parse(id).map_err(|_| CartError::InvalidProductId))
            .collect::<CartResult<Vec<_>>>()?;

        let cart = self
            .repo
            .remove_items(&actor.user_id, &product_ids)
            .await?
            .ok_or(CartError::CartNotFound)?;

        tracing::info!(
            cart_id = %cart.cart_id,
            user_id = %actor.user_id,
            remaining = cart.items.len(),
            "Cart items removed"
        );

        Ok(cart)
    }
}
