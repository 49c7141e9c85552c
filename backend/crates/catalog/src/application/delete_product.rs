//! Delete Product Use Case

use std::sync::Arc;

use auth::User;
use kernel::id::ProductId;

use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `actor` has already passed [`require_admin`](super::access::require_admin).
    pub async fn execute(&self, actor: &User, product_id: &ProductId) -> CatalogResult<()> {
        if !self.repo.delete(product_id).await? {
            return Err(CatalogError::ProductNotFound);
        }

        tracing::info!(
            product_id = %product_id,
            actor_id = %actor.user_id,
            "Product deleted"
        );

        Ok(())
    }
}
