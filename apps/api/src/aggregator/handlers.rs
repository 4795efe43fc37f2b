//! Axum route handlers for the aggregation API.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregator::MAX_LIMIT;
use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::state::AppState;

/// Source labels echoed to clients, in fallback order.
const SOURCE_LABELS: [&str; 3] = ["jsearch", "indeed", "mock"];

fn default_limit() -> usize {
    20
}

#[derive(Debug, Deserialize)]
pub struct ScrapeJobsParams {
    pub keyword: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ScrapeJobsResponse {
    pub jobs: Vec<JobRecord>,
    pub count: usize,
    pub keyword: String,
    pub location: String,
    pub sources: [&'static str; 3],
}

/// GET /scrape_jobs
///
/// Keyword is required and non-blank; limit is silently clamped to [1, 50].
/// The fetch itself is fail-open, so this only errors on bad input.
pub async fn handle_scrape_jobs(
    State(state): State<AppState>,
    Query(params): Query<ScrapeJobsParams>,
) -> Result<Json<ScrapeJobsResponse>, AppError> {
    let keyword = params.keyword.trim().to_string();
    if keyword.is_empty() {
        return Err(AppError::Validation("Keyword is required".to_string()));
    }

    let location = params.location.trim().to_string();
    let limit = clamp_limit(params.limit);

    info!("Starting job scrape: keyword='{keyword}', location='{location}', limit={limit}");

    let jobs = state.aggregator.fetch(&keyword, &location, limit).await;

    info!("Successfully scraped {} jobs", jobs.len());

    Ok(Json(ScrapeJobsResponse {
        count: jobs.len(),
        jobs,
        keyword,
        location,
        sources: SOURCE_LABELS,
    }))
}

fn clamp_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_bounds() {
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(20), 20);
        assert_eq!(clamp_limit(50), 50);
        assert_eq!(clamp_limit(500), 50);
    }

    #[test]
    fn test_params_defaults() {
        let params: ScrapeJobsParams = serde_json::from_str(r#"{"keyword":"rust"}"#).unwrap();
        assert_eq!(params.keyword, "rust");
        assert_eq!(params.location, "");
        assert_eq!(params.limit, 20);
    }
}
