use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::bundle::ResultBundle;
use crate::state::AppState;

/// GET /api/v1/results/:id
/// Returns the persisted bundle for one pipeline run, or 404 once the
/// sweeper has expired it.
pub async fn handle_results(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResultBundle>, AppError> {
    Ok(Json(state.store.load(&id)?))
}
