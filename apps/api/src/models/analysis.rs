use serde::{Deserialize, Serialize};

/// Structured output of resume analysis.
///
/// Invariant: `job_titles` holds exactly the caller-requested number of
/// unique titles, most-relevant-first. The analyzer rejects model output
/// that cannot satisfy this; it never pads or invents substitutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-form in practice; the model is asked for "entry/mid/senior".
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub search_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_model_json() {
        let json = r#"{
            "jobTitles": ["Backend Engineer", "Platform Engineer"],
            "skills": ["Rust", "PostgreSQL"],
            "experienceLevel": "senior",
            "industries": ["fintech"],
            "searchKeywords": ["distributed systems"]
        }"#;
        let analysis: ResumeAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.job_titles.len(), 2);
        assert_eq!(analysis.experience_level, "senior");
        assert_eq!(analysis.search_keywords, vec!["distributed systems"]);
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let json = r#"{"jobTitles": ["Engineer"]}"#;
        let analysis: ResumeAnalysis = serde_json::from_str(json).unwrap();
        assert!(analysis.skills.is_empty());
        assert!(analysis.experience_level.is_empty());
        assert!(analysis.industries.is_empty());
        assert!(analysis.search_keywords.is_empty());
    }
}
