mod analysis;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod scoring;
mod search;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::OllamaClient;
use crate::routes::build_router;
use crate::scoring::throttle::{RateLimiter, SCORING_CALL_INTERVAL};
use crate::search::client::ScriptJobBoardClient;
use crate::state::AppState;
use crate::store::{spawn_sweeper, ResultStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Joblens API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = OllamaClient::new(config.ollama_api_url.clone(), config.ollama_model.clone());
    info!("LLM client initialized (model: {})", config.ollama_model);

    // Initialize job-board client
    let job_board = ScriptJobBoardClient::new(config.job_search_script.clone());
    info!("Job board client initialized ({})", config.job_search_script);

    // One process-wide scoring throttle, shared across all requests
    let limiter = Arc::new(RateLimiter::new(SCORING_CALL_INTERVAL));

    // Result store + background expiry sweep
    let store = ResultStore::new(config.upload_dir.clone())?;
    spawn_sweeper(store.clone());
    info!("Result store initialized ({})", config.upload_dir);

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        job_board: Arc::new(job_board),
        limiter,
        store,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
