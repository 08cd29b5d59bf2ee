pub mod health;
pub mod results;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Multipart bodies carry the resume; lift axum's default body cap to
    // the configured upload limit (field-level size is checked again in
    // the handler).
    let body_limit = DefaultBodyLimit::max(state.config.max_file_size + 64 * 1024);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/match", post(upload::handle_match))
        .route("/api/v1/results/:id", get(results::handle_results))
        .layer(body_limit)
        .with_state(state)
}
