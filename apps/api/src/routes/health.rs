use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner used as a liveness check.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "jobscout-api",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Detailed health check; both pipelines are stateless and always ready.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "services": {
            "job_scraper": "ready",
            "ai_matcher": "ready"
        },
        "environment": state.config.environment
    }))
}
