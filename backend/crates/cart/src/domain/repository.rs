//! Repository Traits

use kernel::id::{ProductId, UserId};

use crate::domain::entity::cart::{Cart, CartItem};
use crate::error::CartResult;

/// Cart repository trait
#[trait_variant::make(CartRepository: Send)]
pub trait LocalCartRepository {
    /// Create the user's cart with `items`, or replace the items of the
    /// existing one
    async fn upsert_items(&self, user_id: &UserId, items: &[CartItem]) -> CartResult<Cart>;

    /// Remove the given products from the user's cart; `None` if the user
    /// has no cart
    async fn remove_items(&self, user_id: &UserId, product_ids: &[ProductId])
    -> CartResult<Option<Cart>>;
}
