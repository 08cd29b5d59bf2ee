//! Result Store — one JSON blob per pipeline run, auto-expired.
//!
//! Bundles are written once, read at most a few times for rendering, and
//! deleted by a periodic sweep once they pass the TTL. A read racing the
//! sweep simply surfaces "not found"; bundles are never mutated in place.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::bundle::ResultBundle;

/// Bundles older than this are garbage-collected.
pub const RESULT_TTL: Duration = Duration::from_secs(60 * 60);

/// How often the background sweep runs.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(15 * 60);

const ID_PREFIX: &str = "results-";

#[derive(Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create result store directory {dir:?}"))?;
        Ok(Self { dir })
    }

    /// Persists a bundle and returns its opaque identifier.
    pub fn save(&self, bundle: &ResultBundle) -> Result<String, AppError> {
        let id = format!("{ID_PREFIX}{}", bundle.timestamp.timestamp_millis());
        let path = self.dir.join(format!("{id}.json"));

        let json = serde_json::to_vec_pretty(bundle)
            .context("failed to serialize result bundle")
            .map_err(AppError::Internal)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write result bundle {path:?}"))
            .map_err(AppError::Internal)?;

        debug!(%id, "result bundle persisted");
        Ok(id)
    }

    /// Loads a bundle by identifier. Any miss — malformed id, expired or
    /// missing file, unreadable contents — surfaces the same not-found
    /// message so callers can only be told to retry.
    pub fn load(&self, id: &str) -> Result<ResultBundle, AppError> {
        if !is_valid_id(id) {
            return Err(not_found());
        }

        let path = self.dir.join(format!("{id}.json"));
        let data = std::fs::read(&path).map_err(|_| not_found())?;
        serde_json::from_slice(&data).map_err(|_| not_found())
    }

    /// Deletes result blobs older than `max_age`. Errors are logged and
    /// never fatal; the sweep retries on its next tick.
    pub fn sweep(&self, max_age: Duration) {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "result sweep could not read store directory");
                return;
            }
        };

        let mut removed = 0usize;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(ID_PREFIX) || !name.ends_with(".json") {
                continue;
            }

            let age = entry
                .metadata()
                .and_then(|m| m.modified())
                .ok()
                .and_then(|mtime| mtime.elapsed().ok());

            if age.is_some_and(|age| age > max_age) {
                match std::fs::remove_file(entry.path()) {
                    Ok(()) => removed += 1,
                    Err(e) => warn!(file = %name, error = %e, "failed to delete expired bundle"),
                }
            }
        }

        if removed > 0 {
            info!(removed, "expired result bundles swept");
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Results not found or expired. Please run the search again.".to_string())
}

/// Identifiers are `results-<millis>`; anything else (including path
/// separators) is rejected before touching the filesystem.
fn is_valid_id(id: &str) -> bool {
    id.strip_prefix(ID_PREFIX)
        .map(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

/// Spawns the fixed-period background sweep. Runs for the life of the
/// process, independently of any in-flight request.
pub fn spawn_sweeper(store: ResultStore) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        ticker.tick().await; // first tick completes immediately
        loop {
            ticker.tick().await;
            store.sweep(RESULT_TTL);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::ResumeAnalysis;
    use crate::models::bundle::SearchStats;
    use chrono::Utc;

    fn bundle() -> ResultBundle {
        ResultBundle {
            timestamp: Utc::now(),
            resume_analysis: ResumeAnalysis {
                job_titles: vec!["Engineer".to_string()],
                skills: vec![],
                experience_level: "mid".to_string(),
                industries: vec![],
                search_keywords: vec![],
            },
            jobs: vec![],
            search_stats: SearchStats {
                queries_generated: 1,
                total_jobs: 0,
                max_per_position: 5,
                positions_generated: 1,
                days_old: 14,
            },
        }
    }

    fn store() -> (tempfile::TempDir, ResultStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, store) = store();
        let id = store.save(&bundle()).unwrap();
        assert!(id.starts_with("results-"));

        let loaded = store.load(&id).unwrap();
        assert_eq!(loaded.resume_analysis.job_titles, vec!["Engineer"]);
        assert_eq!(loaded.search_stats.days_old, 14);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (_dir, store) = store();
        let err = store.load("results-123456789").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_path_traversal_ids_are_rejected() {
        let (_dir, store) = store();
        for id in ["../etc/passwd", "results-../x", "results-", "other-123"] {
            assert!(matches!(store.load(id), Err(AppError::NotFound(_))), "{id}");
        }
    }

    #[test]
    fn test_sweep_deletes_only_aged_bundles() {
        let (_dir, store) = store();
        let id = store.save(&bundle()).unwrap();

        // Fresh bundle survives a sweep with the real TTL.
        store.sweep(RESULT_TTL);
        assert!(store.load(&id).is_ok());

        // Every bundle is "too old" for a zero TTL.
        store.sweep(Duration::ZERO);
        assert!(store.load(&id).is_err());
    }

    #[test]
    fn test_sweep_ignores_unrelated_files() {
        let (dir, store) = store();
        let other = dir.path().join("notes.txt");
        std::fs::write(&other, "keep me").unwrap();

        store.sweep(Duration::ZERO);
        assert!(other.exists());
    }
}
