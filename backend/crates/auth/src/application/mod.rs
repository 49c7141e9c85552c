//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod register_user;
pub mod token;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use config::{AuthConfig, ConfigError};
pub use register_user::{RegisterOutcome, RegisterUserInput, RegisterUserOutput, RegisterUserUseCase};
pub use token::{IssuedToken, TokenIssuer};
