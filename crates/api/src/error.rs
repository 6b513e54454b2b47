use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use formai_core::CoreError;

/// Application-level error type for the JSON endpoints.
///
/// Implements [`IntoResponse`] producing the polling endpoint's
/// `{"status":"error","message":…}` shape. Database detail is logged,
/// never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `formai-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx (connection checkout or query).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound(id)) => {
                tracing::warn!(submission_id = id.as_str(), "Status requested for unknown submission");
                (StatusCode::NOT_FOUND, "submission_id not found")
            }
            AppError::Core(core) => {
                tracing::error!(error = %core, "Core error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database connection error")
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database connection error")
            }
        };

        let body = json!({
            "status": "error",
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
