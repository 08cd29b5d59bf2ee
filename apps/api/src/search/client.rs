//! Job-Board Client — the external process boundary.
//!
//! The production implementation shells out to the configured scraper
//! script once per query. The script's contract: positional arguments
//! (query, location, limit, days_old); on success a single JSON document
//! on stdout — either an array of postings or `{"error": "..."}`; on
//! failure a non-zero exit, with detail optionally as JSON on stderr.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::models::posting::{JobPosting, RawPosting};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Failed to start job search script: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("{0}")]
    Script(String),

    #[error("Failed to parse job search output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("All queries failed: {0}")]
    AllQueriesFailed(String),
}

/// Polymorphic job-board seam: one production implementation, trivially
/// fakeable in tests.
#[async_trait]
pub trait JobBoardClient: Send + Sync {
    async fn search(
        &self,
        query: &str,
        location: &str,
        limit: usize,
        days_old: u32,
    ) -> Result<Vec<JobPosting>, SearchError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Production client: one subprocess invocation per query.
pub struct ScriptJobBoardClient {
    script: PathBuf,
}

impl ScriptJobBoardClient {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

#[async_trait]
impl JobBoardClient for ScriptJobBoardClient {
    async fn search(
        &self,
        query: &str,
        location: &str,
        limit: usize,
        days_old: u32,
    ) -> Result<Vec<JobPosting>, SearchError> {
        let output = Command::new("python")
            .arg(&self.script)
            .arg(query)
            .arg(location)
            .arg(limit.to_string())
            .arg(days_old.to_string())
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            // Prefer a structured error from stderr when the script emits one.
            let message = serde_json::from_str::<ErrorBody>(stderr.trim())
                .map(|body| body.error)
                .unwrap_or_else(|_| {
                    let detail = stderr.trim();
                    if detail.is_empty() {
                        format!("job search script exited with {}", output.status)
                    } else {
                        detail.to_string()
                    }
                });
            return Err(SearchError::Script(message));
        }

        parse_script_output(stdout.trim())
    }
}

/// Parses the script's stdout: an array of raw postings, or an object
/// carrying an `error` string.
fn parse_script_output(stdout: &str) -> Result<Vec<JobPosting>, SearchError> {
    let value: serde_json::Value = serde_json::from_str(stdout)?;

    if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
        return Err(SearchError::Script(message.to_string()));
    }

    let raw: Vec<RawPosting> = serde_json::from_value(value)?;
    debug!(count = raw.len(), "job search script returned postings");

    Ok(raw.into_iter().map(JobPosting::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_array_is_parsed_with_defaults() {
        let stdout = r#"[
            {"jobId": "1", "title": "Rust Engineer", "url": "https://x/1"},
            {"jobId": "2"}
        ]"#;
        let postings = parse_script_output(stdout).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title, "Rust Engineer");
        assert_eq!(postings[1].salary, "Not specified");
    }

    #[test]
    fn test_empty_array_is_ok() {
        assert!(parse_script_output("[]").unwrap().is_empty());
    }

    #[test]
    fn test_error_object_becomes_script_error() {
        let err = parse_script_output(r#"{"error": "rate limited by Indeed"}"#).unwrap_err();
        assert!(matches!(err, SearchError::Script(m) if m == "rate limited by Indeed"));
    }

    #[test]
    fn test_non_json_output_is_a_parse_error() {
        let err = parse_script_output("Traceback (most recent call last):").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_object_without_error_field_is_a_parse_error() {
        // Not an array and not an error object: invalid response shape.
        let err = parse_script_output(r#"{"jobs": []}"#).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }
}
