//! Register User Use Case
//!
//! One endpoint serves both registration and login: an unknown email
//! registers a new account, a known email is a login attempt.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, TokenIssuer};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Register user input
pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// Which branch the request took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Email already registered and password matched
    LoggedIn,
    /// New account created
    Registered,
}

impl RegisterOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RegisterOutcome::LoggedIn => "User already exists. Logged in successfully.",
            RegisterOutcome::Registered => "User registered successfully.",
        }
    }
}

/// Register user output
pub struct RegisterUserOutput {
    pub user: User,
    pub outcome: RegisterOutcome,
    pub token: IssuedToken,
}

/// Register user use case
pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: TokenIssuer,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let tokens = TokenIssuer::new(config.clone());
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> AuthResult<RegisterUserOutput> {
        if input.name.is_empty() || input.email.is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        let password = RawPassword::new(input.password)?;
        let email = Email::new(&input.email)?;

        if let Some(credential) = self.repo.find_credential_by_email(&email).await? {
            let valid = credential
                .password_hash
                .verify(password, self.config.password_pepper.clone())
                .await?;
            if !valid {
                return Err(AuthError::InvalidCredentials);
            }

            let user = credential.user;
            let token = self.tokens.issue(&user.user_id);

            tracing::info!(user_id = %user.user_id, "User logged in");

            return Ok(RegisterUserOutput {
                user,
                outcome: RegisterOutcome::LoggedIn,
                token,
            });
        }

        let role = match input.role.as_deref() {
            Some(code) => UserRole::from_code(code)?,
            None => UserRole::default(),
        };
        let name = UserName::new(&input.name)?;
        let password_hash = UserPassword::hash(password, self.config.password_pepper.clone()).await?;

        let user = User::new(name, email, role);
        self.repo.create(&user, &password_hash).await?;

        let token = self.tokens.issue(&user.user_id);

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User registered"
        );

        Ok(RegisterUserOutput {
            user,
            outcome: RegisterOutcome::Registered,
            token,
        })
    }
}
