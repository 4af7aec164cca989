mod config;
mod errors;
mod llm_client;
mod models;
mod prediction;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::prediction::lifecycle::PredictionController;
use crate::prediction::recorder::{NoopRecorder, SubmissionRecorder, WebhookRecorder};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("predictor_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Predictor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize inference client
    let inference = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("Inference client initialized (model: {})", llm_client::MODEL);

    // Initialize submission recorder
    let recorder: Arc<dyn SubmissionRecorder> = match &config.apps_script_url {
        Some(url) => {
            info!("Submission log webhook configured");
            Arc::new(WebhookRecorder::new(url.clone()))
        }
        None => {
            warn!("APPS_SCRIPT_URL is not set — submissions will not be recorded");
            Arc::new(NoopRecorder)
        }
    };

    // Build the lifecycle controller and app state
    let controller = Arc::new(PredictionController::new(inference, recorder));
    let state = AppState { controller };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the SPA is served from a different origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
