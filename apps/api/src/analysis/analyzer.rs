//! Resume Analyzer — sends resume text to the LLM and validates the
//! structured response down to an exact job-title count.

use std::collections::HashSet;

use crate::analysis::prompts::ANALYSIS_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::parse::extract_json_window;
use crate::llm_client::TextGenerator;
use crate::models::analysis::ResumeAnalysis;

/// Analyzes raw resume text into a `ResumeAnalysis` with exactly
/// `positions_to_generate` unique job titles.
pub async fn analyze(
    llm: &dyn TextGenerator,
    raw_text: &str,
    positions_to_generate: usize,
) -> Result<ResumeAnalysis, AppError> {
    let prompt = ANALYSIS_PROMPT_TEMPLATE
        .replace("{positions}", &positions_to_generate.to_string())
        .replace("{resume_text}", raw_text);

    let response = llm
        .generate(&prompt, None)
        .await
        .map_err(|e| AppError::Analysis(format!("Failed to analyze resume: {e}")))?;

    parse_analysis(&response, positions_to_generate)
}

/// Validates and normalizes the model's raw text into a `ResumeAnalysis`.
///
/// Policy: more titles than requested → truncate to the first N (the
/// model's own relevance ordering is trusted); fewer titles, or fewer
/// unique titles after case-sensitive dedup → fail. This is a strict
/// validation gate, never a best-effort fallback.
pub(crate) fn parse_analysis(
    response: &str,
    positions_to_generate: usize,
) -> Result<ResumeAnalysis, AppError> {
    let window = extract_json_window(response).ok_or_else(|| {
        AppError::Analysis("Model output contained no parseable JSON object".to_string())
    })?;

    let value: serde_json::Value = serde_json::from_str(window)
        .map_err(|e| AppError::Analysis(format!("Model output was not valid JSON: {e}")))?;

    if !value
        .get("jobTitles")
        .map(serde_json::Value::is_array)
        .unwrap_or(false)
    {
        return Err(AppError::Analysis(
            "Invalid response: jobTitles is not an array".to_string(),
        ));
    }

    let mut analysis: ResumeAnalysis = serde_json::from_value(value)
        .map_err(|e| AppError::Analysis(format!("Model output did not match schema: {e}")))?;

    if analysis.job_titles.len() > positions_to_generate {
        // Trim to the requested number, keeping most relevant positions.
        analysis.job_titles.truncate(positions_to_generate);
    } else if analysis.job_titles.len() < positions_to_generate {
        return Err(AppError::Analysis(format!(
            "AI did not generate enough positions (got {}, need {})",
            analysis.job_titles.len(),
            positions_to_generate
        )));
    }

    let mut seen = HashSet::new();
    analysis.job_titles.retain(|title| seen.insert(title.clone()));

    if analysis.job_titles.len() != positions_to_generate {
        return Err(AppError::Analysis(
            "After removing duplicates, not enough unique positions remained".to_string(),
        ));
    }

    Ok(analysis)
}
