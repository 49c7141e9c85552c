//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::INTERNAL_ERROR_MESSAGE, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// The display strings are the exact messages clients receive.
#[derive(Debug, Error)]
pub enum AuthError {
    /// name, email or password missing or empty
    #[error("All fields are required!")]
    MissingFields,

    /// Password below the minimum length
    #[error("Password must contain at least {min} characters!")]
    PasswordTooShort { min: usize },

    /// Role outside the known set
    #[error("Invalid role")]
    InvalidRole,

    /// Body is not JSON of the expected shape
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// Existing account, wrong password
    #[error("Invalid credentials. Incorrect password.")]
    InvalidCredentials,

    /// No session cookie on a protected route
    #[error("Unauthorized - No token provided")]
    NoToken,

    /// Session token tampered, malformed or expired
    #[error("Unauthorized - Invalid token provided")]
    InvalidToken,

    /// Token refers to a user that no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::PasswordTooShort { .. }
            | AuthError::InvalidRole
            | AuthError::MalformedBody(_)
            | AuthError::InvalidCredentials => ErrorKind::BadRequest,
            AuthError::NoToken | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures are reduced to a generic message.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, INTERNAL_ERROR_MESSAGE)
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid or expired session token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // A body-less request carries none of the required fields
            JsonRejection::MissingJsonContentType(_) => AuthError::MissingFields,
            other => AuthError::MalformedBody(other.body_text()),
        }
    }
}
