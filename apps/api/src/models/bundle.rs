use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::analysis::ResumeAnalysis;
use crate::models::posting::JobPosting;

/// Aggregate counters for one pipeline run, echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub queries_generated: usize,
    pub total_jobs: usize,
    pub max_per_position: usize,
    pub positions_generated: usize,
    pub days_old: u32,
}

/// The persisted output of one full pipeline run. Created once per upload,
/// immutable after creation, garbage-collected by the store sweeper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultBundle {
    pub timestamp: DateTime<Utc>,
    pub resume_analysis: ResumeAnalysis,
    pub jobs: Vec<JobPosting>,
    pub search_stats: SearchStats,
}
