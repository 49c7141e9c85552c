//! In-Memory Repository
//!
//! Process-local user store for tests and database-less runs.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::{Credential, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// In-memory user repository
///
/// Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, Credential>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a user, as an operator would directly in the database
    pub async fn remove(&self, user_id: &UserId) -> bool {
        self.users.write().await.remove(user_id).is_some()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User, password: &UserPassword) -> AuthResult<()> {
        let mut users = self.users.write().await;

        // Mirrors the unique index on users.email
        if users.values().any(|c| c.user.email == user.email) {
            return Err(AuthError::Internal(format!(
                "duplicate email for user {}",
                user.user_id
            )));
        }

        users.insert(
            user.user_id,
            Credential {
                user: user.clone(),
                password_hash: password.clone(),
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).map(|c| c.user.clone()))
    }

    async fn find_credential_by_email(&self, email: &Email) -> AuthResult<Option<Credential>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|c| &c.user.email == email)
            .cloned())
    }
}
