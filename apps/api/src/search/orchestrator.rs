//! Search Orchestrator — expands one analysis into N sequential job-board
//! queries, tags results with their source query, caps per query, and
//! deduplicates.

use std::collections::{HashMap, HashSet};

use tracing::{info, warn};

use crate::models::posting::JobPosting;
use crate::search::client::{JobBoardClient, SearchError};

/// Hard global cap on postings requested from the job board per query,
/// regardless of what the caller asks for.
pub const MAX_JOBS_PER_POSITION: usize = 50;

/// Runs every query sequentially (one at a time, to respect the external
/// service's rate tolerance) and returns the flattened, capped,
/// deduplicated posting list.
///
/// Per-query failures are logged and collected; they only abort the batch
/// when every query failed, in which case the aggregated reasons are
/// returned as `SearchError::AllQueriesFailed`.
pub async fn search_all(
    client: &dyn JobBoardClient,
    queries: &[String],
    location: &str,
    per_position_limit: usize,
    days_old: u32,
) -> Result<Vec<JobPosting>, SearchError> {
    let limit = per_position_limit.min(MAX_JOBS_PER_POSITION);

    let mut all_jobs = Vec::new();
    let mut errors = Vec::new();

    for query in queries {
        match client.search(query, location, limit, days_old).await {
            Ok(jobs) => {
                info!(%query, count = jobs.len(), "job search query succeeded");
                for mut job in jobs {
                    job.source_query = query.clone();
                    all_jobs.push(job);
                }
            }
            Err(e) => {
                warn!(%query, error = %e, "job search query failed, continuing");
                errors.push(format!("{query}: {e}"));
            }
        }
    }

    if all_jobs.is_empty() && !errors.is_empty() {
        return Err(SearchError::AllQueriesFailed(errors.join("; ")));
    }

    Ok(dedup_postings(cap_per_query(all_jobs, per_position_limit)))
}

/// Groups postings by source query and truncates each group to the
/// per-position limit, preserving the job board's own ranking order
/// within a group and first-seen order across groups. No re-sorting.
fn cap_per_query(jobs: Vec<JobPosting>, per_position_limit: usize) -> Vec<JobPosting> {
    let mut group_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<JobPosting>> = HashMap::new();

    for job in jobs {
        if !groups.contains_key(&job.source_query) {
            group_order.push(job.source_query.clone());
        }
        groups.entry(job.source_query.clone()).or_default().push(job);
    }

    let mut capped = Vec::new();
    for query in group_order {
        let mut group = groups.remove(&query).unwrap_or_default();
        group.truncate(per_position_limit);
        capped.extend(group);
    }
    capped
}

/// Removes postings whose (job_id, url) composite key was already seen,
/// keeping the first occurrence. Idempotent.
pub fn dedup_postings(jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen = HashSet::new();
    jobs.into_iter()
        .filter(|job| seen.insert(job.dedup_key()))
        .collect()
}
