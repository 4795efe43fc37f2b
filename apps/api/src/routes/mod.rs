pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::aggregator::handlers as aggregator_handlers;
use crate::scorer::handlers as scorer_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/scrape_jobs", get(aggregator_handlers::handle_scrape_jobs))
        .route("/score_jobs", post(scorer_handlers::handle_score_jobs))
        .route("/test_ai", post(scorer_handlers::handle_test_ai))
        .with_state(state)
}
