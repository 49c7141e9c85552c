//! Add To Cart Use Case
//!
//! Replaces the caller's cart items wholesale, creating the cart on first use.

use std::sync::Arc;

use auth::User;
use kernel::id::ProductId;

use crate::domain::entity::cart::{Cart, CartItem};
use crate::domain::repository::CartRepository;
use crate::domain::value_object::quantity::Quantity;
use crate::error::{CartError, CartResult};

/// One requested item, as received
pub struct CartItemInput {
    pub product_id: String,
    pub quantity: Option<i64>,
}

pub struct AddToCartInput {
    pub items: Vec<CartItemInput>,
}

pub struct AddToCartUseCase<R>
where
    R: CartRepository,
{
    repo: Arc<R>,
}

impl<R> AddToCartUseCase<R>
where
    R: CartRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, actor: &User, input: AddToCartInput) -> CartResult<Cart> {
        let items = input
            .items
            .into_iter()
            .map(|item| -> CartResult<CartItem> {
                Ok(CartItem {
                    product_id: ProductId::parse(&item.product_id)
                        .map_err(|_| CartError::InvalidProductId)?,
                    quantity: item.quantity.map(Quantity::new).transpose()?.unwrap_or_default(),
                })
            })
            .collect::<CartResult<Vec<_>>>()?;

        let cart = self.repo.upsert_items(&actor.user_id, &items).await?;

        tracing::info!(
            cart_id = %cart.cart_id,
            user_id = %actor.user_id,
            items = cart.items.len(),
            "Cart items replaced"
        );

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryCartRepository;
    use auth::UserRole;
    use auth::domain::value_object::{email::Email, user_name::UserName};

    fn actor() -> User {
        User::new(
            UserName::new("al").unwrap(),
            Email::new("a@x.com").unwrap(),
            UserRole::Customer,
        )
    }

    fn item(product_id: &str, quantity: Option<i64>) -> CartItemInput {
        CartItemInput {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_upsert_replaces_items() {
        let uc = AddToCartUseCase::new(Arc::new(InMemoryCartRepository::new()));
        let user = actor();
        let (a, b) = (ProductId::new().to_string(), ProductId::new().to_string());

        let first = uc
            .execute(&user, AddToCartInput { items: vec![item(&a, None), item(&b, Some(3))] })
            .await
            .unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.items[0].quantity.value(), 1);
        assert_eq!(first.items[1].quantity.value(), 3);

        let second = uc
            .execute(&user, AddToCartInput { items: vec![item(&b, Some(1))] })
            .await
            .unwrap();
        assert_eq!(second.cart_id, first.cart_id);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.created_at, first.created_at);

        let emptied = uc.execute(&user, AddToCartInput { items: vec![] }).await.unwrap();
        assert!(emptied.items.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_items() {
        let uc = AddToCartUseCase::new(Arc::new(InMemoryCartRepository::new()));
        let user = actor();

        let bad_id = uc
            .execute(&user, AddToCartInput { items: vec![item("abc", None)] })
            .await;
        assert!(matches!(bad_id, Err(CartError::InvalidProductId)));

        let valid = ProductId::new().to_string();
        let bad_quantity = uc
            .execute(&user, AddToCartInput { items: vec![item(&valid, Some(0))] })
            .await;
        assert!(matches!(bad_quantity, Err(CartError::InvalidQuantity)));
    }
}
