//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::{Credential, User};
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user with its password hash
    ///
    /// A duplicate email is a storage error, not a domain one: callers look
    /// the email up first.
    async fn create(&self, user: &User, password: &UserPassword) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user and password hash by (normalized) email
    async fn find_credential_by_email(&self, email: &Email) -> AuthResult<Option<Credential>>;
}
