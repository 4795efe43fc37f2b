//! Core records shared by the aggregation and scoring pipelines.

use serde::{Deserialize, Serialize};

/// Descriptions are capped at ingestion; sources routinely return many KB.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Where a job record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    Jsearch,
    Indeed,
    #[default]
    Mock,
}

/// A job posting as produced by a source adapter. Immutable once parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: Option<String>,
    pub source_url: Option<String>,
    #[serde(default)]
    pub source: JobSource,
}

/// A job plus its AI fit score. Created only by the Fit Scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJobRecord {
    #[serde(flatten)]
    pub job: JobRecord,
    pub fit_score: u32,
    pub score_explanation: String,
}

impl ScoredJobRecord {
    /// Out-of-range scores are clamped into [0, 100], never rejected.
    pub fn new(job: JobRecord, fit_score: i64, score_explanation: String) -> Self {
        Self {
            job,
            fit_score: fit_score.clamp(0, 100) as u32,
            score_explanation,
        }
    }
}

/// Candidate context assembled per scoring request. Not persisted.
#[derive(Debug, Clone)]
pub struct CandidateProfile {
    pub resume_text: String,
    pub skills: Vec<String>,
    pub experience: String,
}

/// Applies the ingestion rules for descriptions: synthesize a line when the
/// source gave none, then cap at [`MAX_DESCRIPTION_CHARS`].
pub fn normalize_description(raw: &str, title: &str, company: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return format!("Job opportunity at {company} for {title} position.");
    }
    trimmed.chars().take(MAX_DESCRIPTION_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&JobSource::Jsearch).unwrap(),
            r#""jsearch""#
        );
        assert_eq!(
            serde_json::to_string(&JobSource::Indeed).unwrap(),
            r#""indeed""#
        );
        assert_eq!(serde_json::to_string(&JobSource::Mock).unwrap(), r#""mock""#);
    }

    #[test]
    fn test_job_record_deserializes_without_source() {
        let json = r#"{
            "title": "Software Engineer",
            "company": "Tech Corp",
            "description": "We are looking for a skilled software engineer",
            "location": "San Francisco, CA",
            "source_url": "https://indeed.com/job/123"
        }"#;
        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.title, "Software Engineer");
        assert_eq!(job.source, JobSource::Mock);
    }

    #[test]
    fn test_scored_record_clamps_high_score() {
        let job = sample_job();
        let scored = ScoredJobRecord::new(job, 150, "great".to_string());
        assert_eq!(scored.fit_score, 100);
    }

    #[test]
    fn test_scored_record_clamps_negative_score() {
        let job = sample_job();
        let scored = ScoredJobRecord::new(job, -10, "poor".to_string());
        assert_eq!(scored.fit_score, 0);
    }

    #[test]
    fn test_scored_record_serializes_flat() {
        let scored = ScoredJobRecord::new(sample_job(), 80, "solid".to_string());
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["title"], "Engineer");
        assert_eq!(value["fit_score"], 80);
        assert_eq!(value["score_explanation"], "solid");
    }

    #[test]
    fn test_normalize_description_synthesizes_when_empty() {
        let description = normalize_description("  ", "Engineer", "Acme");
        assert_eq!(description, "Job opportunity at Acme for Engineer position.");
    }

    #[test]
    fn test_normalize_description_caps_length() {
        let raw = "x".repeat(5000);
        let description = normalize_description(&raw, "Engineer", "Acme");
        assert_eq!(description.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    fn sample_job() -> JobRecord {
        JobRecord {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Build things".to_string(),
            location: None,
            source_url: None,
            source: JobSource::Mock,
        }
    }
}
