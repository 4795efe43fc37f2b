//! Axum route handlers for the scoring API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::job::{JobRecord, ScoredJobRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreJobsRequest {
    pub resume_url: String,
    pub jobs: Vec<JobRecord>,
    #[serde(default)]
    pub user_skills: Vec<String>,
    #[serde(default)]
    pub user_experience: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreJobsResponse {
    pub scored_jobs: Vec<ScoredJobRecord>,
    pub count: usize,
    pub average_score: f64,
}

/// POST /score_jobs
///
/// Requires a resume URL and a non-empty jobs list; the scoring itself is
/// fail-open, so this only errors on bad input.
pub async fn handle_score_jobs(
    State(state): State<AppState>,
    Json(request): Json<ScoreJobsRequest>,
) -> Result<Json<ScoreJobsResponse>, AppError> {
    if request.resume_url.trim().is_empty() {
        return Err(AppError::Validation("Resume URL is required".to_string()));
    }
    if request.jobs.is_empty() {
        return Err(AppError::Validation("Jobs list is required".to_string()));
    }

    info!("Starting AI job scoring for {} jobs", request.jobs.len());

    let scored_jobs = state
        .scorer
        .score(
            &request.resume_url,
            &request.jobs,
            &request.user_skills,
            &request.user_experience,
        )
        .await;

    info!("Successfully scored {} jobs", scored_jobs.len());

    Ok(Json(ScoreJobsResponse {
        count: scored_jobs.len(),
        average_score: average_score(&scored_jobs),
        scored_jobs,
    }))
}

/// POST /test_ai
///
/// Connectivity check: reports which provider scoring requests will use,
/// without making a provider call.
pub async fn handle_test_ai(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "ai_service": state.scorer.provider_status()
    }))
}

/// Arithmetic mean of fit scores; 0 for an empty list.
fn average_score(scored: &[ScoredJobRecord]) -> f64 {
    if scored.is_empty() {
        return 0.0;
    }
    scored.iter().map(|s| s.fit_score as f64).sum::<f64>() / scored.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobSource;

    fn scored(score: i64) -> ScoredJobRecord {
        ScoredJobRecord::new(
            JobRecord {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                description: "desc".to_string(),
                location: None,
                source_url: None,
                source: JobSource::Mock,
            },
            score,
            "ok".to_string(),
        )
    }

    #[test]
    fn test_average_score() {
        let list = vec![scored(80), scored(60), scored(70)];
        assert_eq!(average_score(&list), 70.0);
    }

    #[test]
    fn test_average_score_empty_is_zero() {
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{
            "resume_url": "https://example.com/resume.pdf",
            "jobs": [{"title": "A", "company": "B", "description": "C"}]
        }"#;
        let request: ScoreJobsRequest = serde_json::from_str(json).unwrap();
        assert!(request.user_skills.is_empty());
        assert_eq!(request.user_experience, "");
        assert_eq!(request.jobs[0].source, JobSource::Mock);
    }
}
