use std::sync::Arc;

use crate::aggregator::JobAggregator;
use crate::config::Config;
use crate::scorer::FitScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Both coordinators are read-only after initialization; every request is an
/// independent, stateless invocation.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<JobAggregator>,
    pub scorer: Arc<FitScorer>,
    pub config: Config,
}
