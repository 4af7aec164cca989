//! Prediction lifecycle — orchestrates one request/response cycle.
//!
//! Flow: validate → build prompt → infer → parse → publish terminal state →
//! (on non-empty success) record submission, detached.
//!
//! There is exactly one state cell per process, owned here. Every transition
//! replaces the whole cell with a fresh `Arc`, so observers always read a
//! consistent snapshot and never a half-updated value. The lock is never held
//! across an await.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::llm_client::InferenceClient;
use crate::models::college::College;
use crate::models::input::RequestInput;
use crate::prediction::builder::build_prompt;
use crate::prediction::parser::parse_colleges;
use crate::prediction::recorder::SubmissionRecorder;
use crate::prediction::validation::{validate, RawSubmission, ValidationError};

/// Shown for every inference or parse failure. Internal detail goes to the
/// logs only; the user sees one generic message for all of them.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Sorry, something went wrong while fetching predictions. Please try again.";

/// Shown when the reply was valid but matched nothing.
pub const EMPTY_RESULT_MESSAGE: &str =
    "No colleges found matching your criteria. Try adjusting your score or filters.";

/// Observable state of the single active prediction request.
///
/// Failed, EmptyResult and Success are terminal until the next submit.
#[derive(Debug, PartialEq)]
pub enum PredictionState {
    Idle,
    Validating,
    Submitting,
    Success(Vec<College>),
    EmptyResult,
    Failed(String),
}

/// Reasons a submit call is rejected before the pipeline runs.
#[derive(Debug, PartialEq, Error)]
pub enum SubmitError {
    #[error("A prediction is already in progress. Please wait for it to finish.")]
    InFlight,
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// Owns the state cell and drives the pipeline. Collaborators are injected
/// behind traits so tests run against mocks.
pub struct PredictionController {
    inference: Arc<dyn InferenceClient>,
    recorder: Arc<dyn SubmissionRecorder>,
    state: Mutex<Arc<PredictionState>>,
}

impl PredictionController {
    pub fn new(inference: Arc<dyn InferenceClient>, recorder: Arc<dyn SubmissionRecorder>) -> Self {
        Self {
            inference,
            recorder,
            state: Mutex::new(Arc::new(PredictionState::Idle)),
        }
    }

    /// Current state, as an owned snapshot.
    pub fn snapshot(&self) -> Arc<PredictionState> {
        Arc::clone(&self.lock())
    }

    /// Runs one full prediction cycle and returns the terminal state.
    ///
    /// A submit while another is in flight is rejected with
    /// [`SubmitError::InFlight`] and leaves the running request untouched.
    /// Validation failures return the specific error (its message is shown
    /// verbatim); inference and parse failures land in `Failed` with the
    /// generic message.
    pub async fn submit(&self, raw: &RawSubmission) -> Result<Arc<PredictionState>, SubmitError> {
        let request_id = Uuid::new_v4();
        self.begin()?;

        let input = match validate(raw) {
            Ok(input) => input,
            Err(e) => {
                info!(%request_id, "validation failed: {e}");
                self.set(PredictionState::Failed(e.to_string()));
                return Err(SubmitError::Validation(e));
            }
        };

        let prompt = build_prompt(&input);
        info!(
            %request_id,
            score = input.score,
            category = %input.category,
            state = %input.state,
            "prediction submitted"
        );
        self.set(PredictionState::Submitting);

        let reply = match self.inference.infer(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!(%request_id, "inference failed: {e}");
                return Ok(self.set(PredictionState::Failed(GENERIC_FAILURE_MESSAGE.to_string())));
            }
        };

        let colleges = match parse_colleges(&reply) {
            Ok(colleges) => colleges,
            Err(e) => {
                error!(%request_id, "inference reply rejected: {e}");
                return Ok(self.set(PredictionState::Failed(GENERIC_FAILURE_MESSAGE.to_string())));
            }
        };

        if colleges.is_empty() {
            info!(%request_id, "prediction returned no colleges");
            return Ok(self.set(PredictionState::EmptyResult));
        }

        info!(%request_id, count = colleges.len(), "prediction succeeded");
        let snapshot = self.set(PredictionState::Success(colleges));
        self.spawn_record(request_id, input);
        Ok(snapshot)
    }

    /// Rejects a submit while one is in flight, otherwise enters Validating.
    /// Validating counts as in flight: it always resolves to Failed or
    /// Submitting without suspending, but another request on a parallel
    /// worker could land inside that window.
    fn begin(&self) -> Result<(), SubmitError> {
        let mut cell = self.lock();
        if matches!(
            **cell,
            PredictionState::Validating | PredictionState::Submitting
        ) {
            return Err(SubmitError::InFlight);
        }
        *cell = Arc::new(PredictionState::Validating);
        Ok(())
    }

    /// Publishes the next state, replacing the cell atomically.
    fn set(&self, next: PredictionState) -> Arc<PredictionState> {
        let next = Arc::new(next);
        *self.lock() = Arc::clone(&next);
        next
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Arc<PredictionState>> {
        self.state.lock().expect("prediction state lock poisoned")
    }

    /// Fires the submission log as a detached task. Not awaited: completion
    /// or failure is invisible to the request that triggered it.
    fn spawn_record(&self, request_id: Uuid, input: RequestInput) {
        let recorder = Arc::clone(&self.recorder);
        tokio::spawn(async move {
            if let Err(e) = recorder.record(&input).await {
                warn!(%request_id, "submission log failed (ignored): {e:#}");
            }
        });
    }
}
