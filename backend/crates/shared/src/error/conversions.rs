//! Error conversions - rendering [`AppError`] as an HTTP response

use super::app_error::AppError;

/// Client-facing message for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error!";

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.body())).into_response()
    }
}
