//! Update Product Use Case

use std::sync::Arc;

use auth::User;
use kernel::id::ProductId;

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{price::Price, product_name::ProductName, stock::Stock};
use crate::error::{CatalogError, CatalogResult};

/// Partial update input; absent fields are left unchanged
#[derive(Default)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl UpdateProductInput {
    fn into_patch(self) -> CatalogResult<ProductPatch> {
        Ok(ProductPatch {
            name: self.name.map(ProductName::new).transpose()?,
            description: self.description,
            category: self.category,
            price: self.price.map(Price::new).transpose()?,
            stock: self.stock.map(Stock::new).transpose()?,
        })
    }
}

pub struct UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `actor` has already passed [`require_admin`](super::access::require_admin).
    pub async fn execute(
        &self,
        actor: &User,
        product_id: &ProductId,
        input: UpdateProductInput,
    ) -> CatalogResult<Product> {
        let patch = input.into_patch()?;
        let product = self
            .repo
            .update(product_id, &patch)
            .await?
            .ok_or(CatalogError::ProductNotFound)?;

        tracing::info!(
            product_id = %product.product_id,
            actor_id = %actor.user_id,
            "Product updated"
        );

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_patch_validates_present_fields() {
        let patch = UpdateProductInput {
            stock: Some(4),
            ..Default::default()
        }
        .into_patch()
        .unwrap();
        assert_eq!(patch.stock.map(|s| s.value()), Some(4));
        assert!(patch.name.is_none() && patch.price.is_none());

        let bad_price = UpdateProductInput {
            price: Some(-2.0),
            ..Default::default()
        };
        assert!(matches!(bad_price.into_patch(), Err(CatalogError::InvalidPrice)));

        let bad_name = UpdateProductInput {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(bad_name.into_patch(), Err(CatalogError::EmptyName)));
    }
}
