//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Combined register/login endpoint (`POST /register-user`)
//! - Stateless HMAC-signed session tokens carried in the `jwt` cookie
//! - `require_auth` middleware and `CurrentUser` extractor for other crates
//! - Roles: customer (default) and admin
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never returned
//! - Token MAC compared in constant time; expiry checked on every request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use application::token::TokenIssuer;
pub use domain::entity::user::User;
pub use domain::repository::UserRepository;
pub use domain::value_object::user_role::UserRole;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthMiddlewareState, CurrentUser, require_auth};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
