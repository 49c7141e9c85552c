//! Catalog Error Types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::INTERNAL_ERROR_MESSAGE, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Caller is not an admin (reported as 400)
    #[error("Access denied!")]
    AccessDenied,

    #[error("Name and price are required")]
    MissingNameOrPrice,

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Price must be a non-negative number")]
    InvalidPrice,

    #[error("Stock must be a non-negative integer")]
    InvalidStock,

    #[error("Invalid product id")]
    InvalidProductId,

    #[error("Product not found")]
    ProductNotFound,

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

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::AccessDenied
            | CatalogError::MissingNameOrPrice
            | CatalogError::EmptyName
            | CatalogError::InvalidPrice
            | CatalogError::InvalidStock
            | CatalogError::InvalidProductId
            | CatalogError::MalformedBody(_) => ErrorKind::BadRequest,
            CatalogError::ProductNotFound => ErrorKind::NotFound,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
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
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::AccessDenied => {
                tracing::warn!("Non-admin attempted a catalog mutation");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::MalformedBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CatalogError::AccessDenied.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            CatalogError::InvalidProductId.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(CatalogError::ProductNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            CatalogError::MalformedBody("expected a number".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(CatalogError::AccessDenied.to_app_error().message(), "Access denied!");
        assert_eq!(
            CatalogError::MissingNameOrPrice.to_app_error().message(),
            "Name and price are required"
        );
        assert_eq!(
            CatalogError::Internal("pool timed out".into()).to_app_error().message(),
            INTERNAL_ERROR_MESSAGE
        );
    }
}
