//! Application Layer
//!
//! Use cases for the product catalog.

pub mod access;
pub mod create_product;
pub mod delete_product;
pub mod list_products;
pub mod update_product;

// Re-exports
pub use access::require_admin;
pub use create_product::{CreateProductInput, CreateProductUseCase};
pub use delete_product::DeleteProductUseCase;
pub use list_products::ListProductsUseCase;
pub use update_product::{UpdateProductInput, UpdateProductUseCase};
