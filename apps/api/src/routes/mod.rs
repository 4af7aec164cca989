pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::prediction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prediction API
        .route("/api/v1/predictions", post(handlers::handle_predict))
        .route(
            "/api/v1/predictions/current",
            get(handlers::handle_current),
        )
        .route("/api/v1/presets", get(handlers::handle_presets))
        .with_state(state)
}
