use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use jobfinder_core::error::AppError;

use crate::dto::ErrorResponse;

/// Plain-text body for every 404.
pub const NOT_FOUND_BODY: &str = "not found";

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self.0 {
            AppError::NotFound(what) => {
                tracing::debug!(%what, "Not found");
                return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
            }
            AppError::StoreUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
            AppError::CorruptValue { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "corrupt_value"),
            AppError::SerializationError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "serialization_error")
            }
            AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
        };

        tracing::error!(error = %self.0, "Request failed");

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.0.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
