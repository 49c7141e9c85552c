//! Cart Error Types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::INTERNAL_ERROR_MESSAGE, kind::ErrorKind};
use thiserror::Error;

/// Cart-specific result type alias
pub type CartResult<T> = Result<T, CartError>;

/// Cart-specific error variants
#[derive(Debug, Error)]
pub enum CartError {
    #[error("productIds must be a non-empty array")]
    EmptyProductIds,

    #[error("Invalid product id")]
    InvalidProductId,

    #[error("Quantity must be a positive integer")]
    InvalidQuantity,

    #[error("Cart not found")]
    CartNotFound,

    /// Body is not JSON of the expected shape
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CartError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::EmptyProductIds
            | CartError::InvalidProductId
            | CartError::InvalidQuantity
            | CartError::MalformedBody(_) => ErrorKind::BadRequest,
            CartError::CartNotFound => ErrorKind::NotFound,
            CartError::Database(_) | CartError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, INTERNAL_ERROR_MESSAGE)
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    fn log(&self) {
        match self {
            CartError::Database(e) => {
                tracing::error!(error = %e, "Cart database error");
            }
            CartError::Internal(msg) => {
                tracing::error!(message = %msg, "Cart internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Cart error");
            }
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for CartError {
    fn from(rejection: JsonRejection) -> Self {
        CartError::MalformedBody(rejection.body_text())
    }
}
