use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::prediction::lifecycle::SubmitError;
use crate::prediction::validation::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only validation messages reach the client verbatim — they are actionable.
/// Everything else is logged in full and answered with generic copy.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    #[error("A prediction is already in progress")]
    PredictionInFlight,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::InFlight => AppError::PredictionInFlight,
            SubmitError::Validation(e) => AppError::Validation(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(e) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::PredictionInFlight => (
                StatusCode::CONFLICT,
                "PREDICTION_IN_FLIGHT",
                "A prediction is already in progress. Please wait for it to finish.".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
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
