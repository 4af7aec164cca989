use std::sync::Arc;

use crate::prediction::lifecycle::PredictionController;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The controller is the only shared-mutable piece: it owns the single
/// prediction state cell. Handlers never touch the inference client or the
/// recorder directly — both live behind the controller.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<PredictionController>,
}
