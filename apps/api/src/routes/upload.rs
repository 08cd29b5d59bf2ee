//! POST /api/v1/match — the full pipeline for one resume upload:
//! extract → analyze → search → score → persist.

use std::path::{Path, PathBuf};

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::analysis::analyzer::analyze;
use crate::analysis::extractor::extract_text;
use crate::analysis::queries::expand_queries;
use crate::errors::AppError;
use crate::models::bundle::{ResultBundle, SearchStats};
use crate::scoring::scorer::score_all;
use crate::search::orchestrator::search_all;
use crate::state::AppState;

const DEFAULT_MAX_JOBS_PER_POSITION: usize = 5;
const DEFAULT_DAYS_OLD: u32 = 14;
const DEFAULT_POSITIONS_TO_GENERATE: usize = 5;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: String,
    pub stats: SearchStats,
}

#[derive(Debug)]
struct MatchRequest {
    file_name: String,
    data: Vec<u8>,
    location: String,
    max_jobs_per_position: usize,
    days_old: u32,
    positions_to_generate: usize,
    expand_queries: bool,
}

pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let request = read_match_request(multipart, state.config.max_file_size).await?;

    // Persist the upload under a timestamped name, then extract its text.
    let upload_path = save_upload(&state.config.upload_dir, &request)?;
    let resume_text = extract_text(&upload_path)?;

    let analysis = analyze(
        state.llm.as_ref(),
        &resume_text,
        request.positions_to_generate,
    )
    .await?;

    // Default: one query per generated job title. The expanded set widens
    // each title with experience level, top skills, and explicit keywords.
    let queries = if request.expand_queries {
        expand_queries(&analysis)
    } else {
        analysis.job_titles.clone()
    };

    info!(
        queries = queries.len(),
        positions = request.positions_to_generate,
        "starting job search"
    );

    let jobs = search_all(
        state.job_board.as_ref(),
        &queries,
        &request.location,
        request.max_jobs_per_position,
        request.days_old,
    )
    .await
    .map_err(|e| AppError::Search(e.to_string()))?;

    let total_jobs = jobs.len();
    let scored = score_all(state.llm.as_ref(), &state.limiter, &analysis, jobs).await;

    let stats = SearchStats {
        queries_generated: queries.len(),
        total_jobs,
        max_per_position: request.max_jobs_per_position,
        positions_generated: request.positions_to_generate,
        days_old: request.days_old,
    };

    let bundle = ResultBundle {
        timestamp: Utc::now(),
        resume_analysis: analysis,
        jobs: scored,
        search_stats: stats.clone(),
    };
    let id = state.store.save(&bundle)?;

    info!(%id, total_jobs, "pipeline run complete");

    Ok(Json(MatchResponse { id, stats }))
}

/// Reads and validates the multipart form. The resume field is required;
/// every other field falls back to its stated default when missing or
/// unparseable.
async fn read_match_request(
    mut multipart: Multipart,
    max_file_size: usize,
) -> Result<MatchRequest, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut location = String::new();
    let mut max_jobs_per_position = DEFAULT_MAX_JOBS_PER_POSITION;
    let mut days_old = DEFAULT_DAYS_OLD;
    let mut positions_to_generate = DEFAULT_POSITIONS_TO_GENERATE;
    let mut expand = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::Validation("Resume file has no name.".to_string()))?;
                validate_extension(&file_name)?;

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                if data.len() > max_file_size {
                    return Err(AppError::Validation(format!(
                        "Resume file exceeds the maximum size of {max_file_size} bytes."
                    )));
                }
                file = Some((file_name, data.to_vec()));
            }
            "location" => location = text_field(field).await?,
            "max_jobs_per_position" => {
                max_jobs_per_position = parse_field(field, DEFAULT_MAX_JOBS_PER_POSITION).await?;
            }
            "days_old" => days_old = parse_field(field, DEFAULT_DAYS_OLD).await?,
            "positions_to_generate" => {
                positions_to_generate =
                    parse_field(field, DEFAULT_POSITIONS_TO_GENERATE).await?;
            }
            "expand_queries" => {
                let value = text_field(field).await?;
                expand = matches!(value.trim(), "true" | "1");
            }
            _ => {} // unknown fields are ignored
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::Validation("Please upload a resume file.".to_string()))?;

    if positions_to_generate == 0 {
        return Err(AppError::Validation(
            "positions_to_generate must be at least 1.".to_string(),
        ));
    }

    Ok(MatchRequest {
        file_name,
        data,
        location,
        max_jobs_per_position,
        days_old,
        positions_to_generate,
        expand_queries: expand,
    })
}

/// Extension whitelist applied before anything is written to disk.
/// Word documents are rejected here with an explicit message rather than
/// accepted and failed later at extraction.
fn validate_extension(file_name: &str) -> Result<(), AppError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" | "txt" => Ok(()),
        "doc" | "docx" => Err(AppError::Validation(
            "Word documents are not supported. Please convert your resume to PDF or TXT."
                .to_string(),
        )),
        _ => Err(AppError::Validation(
            "Invalid file type. Only PDF and TXT files are allowed.".to_string(),
        )),
    }
}

fn save_upload(upload_dir: &str, request: &MatchRequest) -> Result<PathBuf, AppError> {
    // Keep only the final path component of the client-supplied name.
    let base_name = Path::new(&request.file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume");

    let path = Path::new(upload_dir).join(format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        base_name
    ));

    std::fs::write(&path, &request.data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to store upload: {e}")))?;
    Ok(path)
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))
}

async fn parse_field<T: std::str::FromStr>(
    field: axum::extract::multipart::Field<'_>,
    default: T,
) -> Result<T, AppError> {
    let text = text_field(field).await?;
    Ok(parse_or_default(&text, default))
}

/// Numeric form fields never reject the request: blank or unparseable
/// values fall back to the field's stated default.
fn parse_or_default<T: std::str::FromStr>(text: &str, default: T) -> T {
    text.trim().parse::<T>().unwrap_or(default)
}
