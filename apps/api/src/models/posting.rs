use serde::{Deserialize, Serialize};

/// One job listing flowing through the pipeline. All fields are concrete:
/// the job-board script's nulls and omissions are normalized away at the
/// client boundary via `RawPosting`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub date_posted: String,
    pub salary: String,
    pub job_type: String,
    /// The query that surfaced this posting; filled by the orchestrator.
    #[serde(default)]
    pub source_query: String,
    /// Model-estimated resume-to-posting relevance in [0, 1].
    pub match_score: f64,
}

impl JobPosting {
    /// Identity key for deduplication. Two postings sharing this key are
    /// the same entity; only the first encountered survives.
    pub fn dedup_key(&self) -> String {
        format!("{}{}", self.job_id, self.url)
    }
}

/// A posting exactly as the job-board script emits it: any field may be
/// missing or null. Converting to `JobPosting` applies the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosting {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub date_posted: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
}

const NOT_SPECIFIED: &str = "Not specified";

impl From<RawPosting> for JobPosting {
    fn from(raw: RawPosting) -> Self {
        JobPosting {
            job_id: raw.job_id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            company: raw.company.unwrap_or_default(),
            location: raw.location.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            date_posted: raw.date_posted.unwrap_or_default(),
            salary: raw.salary.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            job_type: raw.job_type.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            source_query: String::new(),
            match_score: raw.match_score.unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_defaulted() {
        let raw: RawPosting = serde_json::from_str(r#"{"title": "Rust Engineer"}"#).unwrap();
        let posting = JobPosting::from(raw);
        assert_eq!(posting.title, "Rust Engineer");
        assert_eq!(posting.job_id, "");
        assert_eq!(posting.salary, "Not specified");
        assert_eq!(posting.job_type, "Not specified");
        assert_eq!(posting.match_score, 0.0);
    }

    #[test]
    fn test_null_fields_are_defaulted() {
        let json = r#"{
            "jobId": "j1",
            "title": null,
            "salary": null,
            "jobType": null,
            "matchScore": null
        }"#;
        let raw: RawPosting = serde_json::from_str(json).unwrap();
        let posting = JobPosting::from(raw);
        assert_eq!(posting.job_id, "j1");
        assert_eq!(posting.title, "");
        assert_eq!(posting.salary, "Not specified");
        assert_eq!(posting.job_type, "Not specified");
        assert_eq!(posting.match_score, 0.0);
    }

    #[test]
    fn test_dedup_key_concatenates_id_and_url() {
        let raw: RawPosting =
            serde_json::from_str(r#"{"jobId": "abc", "url": "https://x/1"}"#).unwrap();
        let posting = JobPosting::from(raw);
        assert_eq!(posting.dedup_key(), "abchttps://x/1");
    }

    #[test]
    fn test_full_posting_round_trips_camel_case() {
        let raw: RawPosting = serde_json::from_str(
            r#"{
                "jobId": "j2",
                "title": "Engineer",
                "company": "Acme",
                "location": "Remote",
                "description": "Build things",
                "url": "https://x/2",
                "datePosted": "2026-08-01",
                "salary": "$100k",
                "jobType": "fulltime",
                "matchScore": 0.25
            }"#,
        )
        .unwrap();
        let posting = JobPosting::from(raw);
        assert_eq!(posting.date_posted, "2026-08-01");
        assert_eq!(posting.match_score, 0.25);

        let json = serde_json::to_value(&posting).unwrap();
        assert_eq!(json["jobId"], "j2");
        assert_eq!(json["sourceQuery"], "");
        assert_eq!(json["matchScore"], 0.25);
    }
}
