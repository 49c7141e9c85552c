//! In-Memory Repository

use std::sync::Arc;

use chrono::Utc;
use kernel::id::ProductId;
use tokio::sync::RwLock;

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// In-memory product repository
///
/// Kept as a vector so listing order is insertion order.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn create(&self, product: &Product) -> CatalogResult<()> {
        self.products.write().await.push(product.clone());
        Ok(())
    }

    async fn update(
        &self,
        product_id: &ProductId,
        patch: &ProductPatch,
    ) -> CatalogResult<Option<Product>> {
        let mut products = self.products.write().await;

        Ok(products
            .iter_mut()
            .find(|p| &p.product_id == product_id)
            .map(|product| {
                product.apply(patch, Utc::now());
                product.clone()
            }))
    }

    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| &p.product_id != product_id);
        Ok(products.len() < before)
    }
}
