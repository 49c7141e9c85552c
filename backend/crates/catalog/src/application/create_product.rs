//! Create Product Use Case

use std::sync::Arc;

use auth::User;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{price::Price, product_name::ProductName, stock::Stock};
use crate::error::{CatalogError, CatalogResult};

/// Create product input, as received
pub struct CreateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

pub struct CreateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `actor` has already passed [`require_admin`](super::access::require_admin).
    pub async fn execute(&self, actor: &User, input: CreateProductInput) -> CatalogResult<Product> {
        let (name, price) = match (input.name, input.price) {
            (Some(name), Some(price)) if !name.is_empty() => (name, price),
            _ => return Err(CatalogError::MissingNameOrPrice),
        };

        let product = Product::new(
            ProductName::new(name)?,
            input.description,
            input.category,
            Price::new(price)?,
            input.stock.map(Stock::new).transpose()?.unwrap_or_default(),
        );

        self.repo.create(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            actor_id = %actor.user_id,
            "Product created"
        );

        Ok(product)
    }
}
