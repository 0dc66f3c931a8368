//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use filegate_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype carrying an [`AppError`] across the handler boundary so it can
/// be turned into a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self.0.kind {
            // Rejections carry a constant body: the reason (missing claim,
            // bad signature, unknown user, ...) stays in the logs.
            ErrorKind::Forbidden => {
                tracing::debug!(reason = %self.0.message, "request forbidden");
                (StatusCode::FORBIDDEN, "FORBIDDEN", "Forbidden".to_string())
            }
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.0.message.clone(),
            ),
            ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.0.message.clone(),
            ),
            _ => {
                tracing::error!(error = %self.0.message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
