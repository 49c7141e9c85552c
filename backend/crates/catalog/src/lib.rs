//! Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Listing is open to any signed-in user; creating, updating and deleting
//! products is reserved for admins.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::memory::InMemoryProductRepository;
pub use infra::postgres::PgProductRepository;
pub use presentation::router::{catalog_router, catalog_router_generic};
