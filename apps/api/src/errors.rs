use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only two failures ever reach a caller: bad input, and a company that could
/// not be analyzed. Store and webhook failures are logged where they happen.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Carries the user-facing message; the cause is logged by the resolver.
    #[error("Analysis failed: {0}")]
    Analysis(String),
}

impl AppError {
    pub fn analysis_failed(company_name: &str) -> Self {
        AppError::Analysis(format!(
            "We couldn't analyze \"{company_name}\" at this time. Please try again later or choose a different company."
        ))
    }
}

/// A malformed or mistyped body is a validation error like any other.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// `Json` extractor whose rejection is an `AppError`, so bad bodies get the
/// same error envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::Analysis(msg) => {
                tracing::error!("Analysis error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "ANALYSIS_FAILED", msg)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
