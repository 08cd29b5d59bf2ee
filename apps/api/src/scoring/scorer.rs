//! Match Scorer — one throttled LLM call per posting.
//!
//! Failure policy: a failed model call scores the job 0.0 (worst match, no
//! retry, never propagated); a response without a well-formed score tag
//! scores 0.50 (neutral). Absence of an answer is deliberately scored
//! differently from an outright call failure, and no outcome aborts the
//! batch.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{info, warn};

use crate::llm_client::{LlmError, TextGenerator};
use crate::models::analysis::ResumeAnalysis;
use crate::models::posting::JobPosting;
use crate::scoring::prompts::{SCORING_PROMPT_TEMPLATE, SCORING_SYSTEM};
use crate::scoring::throttle::RateLimiter;

/// Low temperature for consistent, focused score responses.
const SCORING_TEMPERATURE: f32 = 0.1;

/// Assigned when the model responds but no well-formed tag is found.
pub const NEUTRAL_SCORE: f64 = 0.50;

/// Assigned when the model call itself fails.
pub const FAILED_CALL_SCORE: f64 = 0.0;

/// Accepts exactly 0, 1, 1.00, or a decimal with one or two fractional
/// digits below one. Compiled once; the pattern is a constant.
fn score_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\\matchScore\{(0|1|0\.\d{1,2}|1\.00)\}")
            .expect("score tag pattern is valid")
    })
}

/// Scores every posting strictly sequentially, waiting on the shared rate
/// limiter before each model call. Always returns exactly the input jobs,
/// each with `match_score` populated.
pub async fn score_all(
    llm: &dyn TextGenerator,
    limiter: &RateLimiter,
    analysis: &ResumeAnalysis,
    jobs: Vec<JobPosting>,
) -> Vec<JobPosting> {
    let total = jobs.len();
    let mut scored = Vec::with_capacity(total);

    for (index, mut job) in jobs.into_iter().enumerate() {
        limiter.wait().await;

        job.match_score = match score_one(llm, analysis, &job).await {
            Ok(score) => score,
            Err(e) => {
                warn!(job_id = %job.job_id, error = %e, "scoring call failed, assigning worst-match score");
                FAILED_CALL_SCORE
            }
        };
        scored.push(job);

        if (index + 1) % 10 == 0 {
            info!("Scored {} of {} jobs", index + 1, total);
        }
    }

    scored
}

async fn score_one(
    llm: &dyn TextGenerator,
    analysis: &ResumeAnalysis,
    job: &JobPosting,
) -> Result<f64, LlmError> {
    let prompt = build_scoring_prompt(analysis, job);
    let response = llm.generate(&prompt, Some(SCORING_TEMPERATURE)).await?;
    Ok(extract_match_score(&response))
}

fn build_scoring_prompt(analysis: &ResumeAnalysis, job: &JobPosting) -> String {
    format!("{SCORING_SYSTEM}\n\n{}", SCORING_PROMPT_TEMPLATE
        .replace("{experience_level}", &analysis.experience_level)
        .replace("{skills}", &analysis.skills.join(", "))
        .replace("{industries}", &analysis.industries.join(", "))
        .replace("{job_titles}", &analysis.job_titles.join(", "))
        .replace("{job_title}", &job.title)
        .replace("{company}", &job.company)
        .replace("{description}", &job.description))
}

/// Extracts the score from `\matchScore{...}` tags in the model's raw
/// response. Missing tag or an out-of-range capture → `NEUTRAL_SCORE`.
/// Output is always inside [0.0, 1.0].
pub(crate) fn extract_match_score(response: &str) -> f64 {
    let Some(captures) = score_tag_pattern().captures(response) else {
        warn!("No matchScore tag found in model response");
        return NEUTRAL_SCORE;
    };

    match captures[1].parse::<f64>() {
        Ok(score) if (0.0..=1.0).contains(&score) => score,
        _ => {
            warn!(raw = &captures[1], "Score outside valid range");
            NEUTRAL_SCORE
        }
    }
}
