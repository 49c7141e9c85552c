//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::set_cookie_header;

use crate::application::config::AuthConfig;
use crate::application::{RegisterOutcome, RegisterUserInput, RegisterUserUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{RegisterUserRequest, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register User
// ============================================================================

/// POST /register-user
///
/// Registers a new account (201) or logs into an existing one (200).
/// Either way the session cookie is set.
pub async fn register_user<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = RegisterUserUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterUserInput {
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
        role: req.role,
    };

    let output = use_case.execute(input).await?;

    let cookie = set_cookie_header(&state.config.cookie(), &output.token.token)
        .ok_or_else(|| AuthError::Internal("Session token is not a valid header value".into()))?;

    let status = match output.outcome {
        RegisterOutcome::LoggedIn => StatusCode::OK,
        RegisterOutcome::Registered => StatusCode::CREATED,
    };

    Ok((
        status,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::new(&output.user, output.outcome.message())),
    ))
}
