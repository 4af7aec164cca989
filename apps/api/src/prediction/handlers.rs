//! Axum route handlers for the Prediction API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::college::College;
use crate::models::input::{Preset, PRESETS};
use crate::prediction::lifecycle::{PredictionState, EMPTY_RESULT_MESSAGE};
use crate::prediction::validation::RawSubmission;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// What the client renders after a submit or a state poll.
#[derive(Debug, Serialize)]
pub struct PredictionView {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub colleges: Vec<College>,
}

impl PredictionView {
    /// Flattens a state snapshot into the client shape. Colleges keep the
    /// parser's order — the client must not re-sort them.
    fn from_state(state: &PredictionState) -> Self {
        match state {
            PredictionState::Idle => Self::plain("idle"),
            PredictionState::Validating => Self::plain("validating"),
            PredictionState::Submitting => Self::plain("submitting"),
            PredictionState::Success(colleges) => PredictionView {
                status: "success",
                message: None,
                colleges: colleges.clone(),
            },
            PredictionState::EmptyResult => PredictionView {
                status: "empty",
                message: Some(EMPTY_RESULT_MESSAGE.to_string()),
                colleges: vec![],
            },
            PredictionState::Failed(reason) => PredictionView {
                status: "failed",
                message: Some(reason.clone()),
                colleges: vec![],
            },
        }
    }

    fn plain(status: &'static str) -> Self {
        PredictionView {
            status,
            message: None,
            colleges: vec![],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    pub presets: Vec<Preset>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/predictions
///
/// Runs one full prediction cycle. Validation failures come back as 400 with
/// the exact form copy; a submit while one is in flight as 409. Inference and
/// parse failures are a 200 `failed` view with the generic message.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<RawSubmission>,
) -> Result<Json<PredictionView>, AppError> {
    let snapshot = state.controller.submit(&request).await?;
    Ok(Json(PredictionView::from_state(&snapshot)))
}

/// GET /api/v1/predictions/current
///
/// Snapshot of the request lifecycle, for polling while a submit is pending.
pub async fn handle_current(State(state): State<AppState>) -> Json<PredictionView> {
    Json(PredictionView::from_state(&state.controller.snapshot()))
}

/// GET /api/v1/presets
///
/// The fixed "try an example" presets. Applying one is a client-side action;
/// nothing is submitted here.
pub async fn handle_presets() -> Json<PresetsResponse> {
    Json(PresetsResponse {
        presets: PRESETS.to_vec(),
    })
}
