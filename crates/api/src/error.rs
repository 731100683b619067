use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qrforge_core::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `qrforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Encoding(msg) => {
                    tracing::error!(error = %msg, "QR encoding failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "encoding_failed".to_string(),
                    )
                }
                CoreError::Image(msg) => {
                    tracing::error!(error = %msg, "Image serialization failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "encoding_failed".to_string(),
                    )
                }
                CoreError::Io(err) => {
                    tracing::error!(error = %err, "Storage error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "save_failed".to_string())
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
