//! Authenticate Use Case
//!
//! Resolves the session cookie value to the stored user.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: TokenIssuer,
}

impl<R> AuthenticateUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens: TokenIssuer::new(config),
        }
    }

    /// Map a cookie value to a user
    ///
    /// An absent or empty cookie is `NoToken`.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<User> {
        let token = token.filter(|t| !t.is_empty()).ok_or(AuthError::NoToken)?;
        let user_id = self.tokens.verify(token)?;

        self.repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
