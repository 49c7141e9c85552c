//! Repository Traits

use kernel::id::ProductId;

use crate::domain::entity::product::{Product, ProductPatch};
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// All products, oldest first
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    async fn create(&self, product: &Product) -> CatalogResult<()>;

    /// Apply `patch` atomically; `None` if no such product
    async fn update(&self, product_id: &ProductId, patch: &ProductPatch)
    -> CatalogResult<Option<Product>>;

    /// Returns whether a product was deleted
    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool>;
}
