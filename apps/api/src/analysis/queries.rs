//! Query expansion — widens one analysis into a broader set of job-board
//! queries than the plain title-per-position default.

use std::collections::HashSet;

use crate::models::analysis::ResumeAnalysis;

/// How many leading skills get combined with each title.
const TOP_SKILLS: usize = 2;

/// Expands a `ResumeAnalysis` into a deduplicated query list: each title
/// alone, each title prefixed with the experience level, each title paired
/// with the top skills, then all explicit search keywords verbatim.
/// First-occurrence order is preserved; exact-string duplicates collapse.
pub fn expand_queries(analysis: &ResumeAnalysis) -> Vec<String> {
    let mut queries = Vec::new();

    for title in &analysis.job_titles {
        queries.push(title.clone());

        if !analysis.experience_level.trim().is_empty() {
            queries.push(format!("{} {}", analysis.experience_level, title));
        }

        for skill in analysis.skills.iter().take(TOP_SKILLS) {
            queries.push(format!("{title} {skill}"));
        }
    }

    queries.extend(analysis.search_keywords.iter().cloned());

    let mut seen = HashSet::new();
    queries.retain(|q| seen.insert(q.clone()));
    queries
}
