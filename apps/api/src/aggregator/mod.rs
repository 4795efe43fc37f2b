//! Job Aggregator — multi-source job fetching with dedup and a mock safety net.
//!
//! Sources are queried sequentially: the structured JSearch API first, then
//! Indeed HTML scraping for whatever shortfall remains. Failures in either
//! source are absorbed as "zero results"; a fully empty outcome falls back to
//! synthetic data so the caller never receives an error.

pub mod dedup;
pub mod handlers;
pub mod indeed;
pub mod jsearch;
pub mod mock;

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::job::JobRecord;
use self::indeed::IndeedScraper;
use self::jsearch::JsearchClient;

/// Hard ceiling on the number of jobs a single fetch may return.
pub const MAX_LIMIT: usize = 50;

pub struct JobAggregator {
    jsearch: Option<JsearchClient>,
    indeed: IndeedScraper,
}

impl JobAggregator {
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.http_timeout_secs);

        let jsearch = match &config.jsearch_api_key {
            Some(key) => Some(JsearchClient::new(
                key.clone(),
                config.jsearch_api_host.clone(),
                timeout,
            )?),
            None => {
                info!("JSearch API key not configured; structured source disabled");
                None
            }
        };

        Ok(Self {
            jsearch,
            indeed: IndeedScraper::new(timeout)?,
        })
    }

    /// Fetches up to `limit` unique jobs for a keyword/location.
    ///
    /// Fail-open: if every source fails or comes back empty, a synthetic job
    /// list is returned instead. This operation never errors.
    pub async fn fetch(&self, keyword: &str, location: &str, limit: usize) -> Vec<JobRecord> {
        let jobs = self.fetch_from_sources(keyword, location, limit).await;

        if jobs.is_empty() {
            info!("All sources empty; generating mock job data as fallback");
            return mock::mock_jobs(keyword, location, limit);
        }

        info!("Total unique jobs found: {}", jobs.len());
        jobs
    }

    async fn fetch_from_sources(
        &self,
        keyword: &str,
        location: &str,
        limit: usize,
    ) -> Vec<JobRecord> {
        let mut all_jobs = Vec::new();

        if let Some(jsearch) = &self.jsearch {
            info!("Fetching jobs from JSearch API");
            match jsearch.search(keyword, location, limit).await {
                Ok(jobs) => {
                    info!("JSearch API returned {} jobs", jobs.len());
                    all_jobs.extend(jobs);
                }
                Err(e) => warn!("JSearch API request failed: {e:#}"),
            }
        }

        if all_jobs.len() < limit {
            let remaining = limit - all_jobs.len();
            info!("Fetching {remaining} additional jobs from Indeed");
            match self.indeed.scrape(keyword, location, remaining).await {
                Ok(jobs) => {
                    info!("Indeed scraping returned {} jobs", jobs.len());
                    all_jobs.extend(jobs);
                }
                Err(e) => warn!("Indeed scraping failed: {e:#}"),
            }
        }

        let unique = dedup::remove_duplicates(all_jobs);
        unique.into_iter().take(limit).collect()
    }
}
