//! Cart Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Cart entity, quantity value object, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL (JSONB items) and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Each user has at most one cart. Adding replaces its items wholesale;
//! removing prunes matching products and keeps the order of the rest.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CartError, CartResult};
pub use infra::memory::InMemoryCartRepository;
pub use infra::postgres::PgCartRepository;
pub use presentation::router::{cart_router, cart_router_generic};
