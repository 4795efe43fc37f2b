//! Structured job-search API client (JSearch on RapidAPI).

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::models::job::{normalize_description, JobRecord, JobSource};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchResult>,
}

/// Raw JSearch result. Everything is optional; validation happens in
/// [`parse_result`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchResult {
    job_title: Option<String>,
    employer_name: Option<String>,
    job_description: Option<String>,
    job_city: Option<String>,
    job_state: Option<String>,
    job_country: Option<String>,
    job_apply_link: Option<String>,
    job_url: Option<String>,
}

pub struct JsearchClient {
    client: Client,
    api_key: String,
    api_host: String,
}

impl JsearchClient {
    pub fn new(api_key: String, api_host: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build JSearch HTTP client")?;

        Ok(Self {
            client,
            api_key,
            api_host,
        })
    }

    /// Queries the search endpoint once and maps results into `JobRecord`s.
    /// Malformed entries (missing title or company) are silently skipped.
    pub async fn search(
        &self,
        keyword: &str,
        location: &str,
        limit: usize,
    ) -> Result<Vec<JobRecord>> {
        let query = format!("{keyword} {location}");
        let url = format!("https://{}/search", self.api_host);

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(&[
                ("query", query.trim()),
                ("page", "1"),
                ("num_pages", "1"),
                ("date_posted", "all"),
            ])
            .send()
            .await
            .context("JSearch request failed")?;

        if !response.status().is_success() {
            anyhow::bail!("JSearch API error: {}", response.status());
        }

        let body: SearchResponse = response
            .json()
            .await
            .context("Failed to decode JSearch response")?;

        let jobs: Vec<JobRecord> = body
            .data
            .into_iter()
            .take(limit)
            .filter_map(parse_result)
            .collect();

        debug!("JSearch returned {} usable records", jobs.len());
        Ok(jobs)
    }
}

/// Maps one raw result into a `JobRecord`, or `None` when title or company is
/// missing.
fn parse_result(item: SearchResult) -> Option<JobRecord> {
    let title = item.job_title.as_deref().unwrap_or("").trim().to_string();
    let company = item
        .employer_name
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();

    if title.is_empty() || company.is_empty() {
        return None;
    }

    let description = normalize_description(
        item.job_description.as_deref().unwrap_or(""),
        &title,
        &company,
    );

    let location_parts: Vec<&str> = [&item.job_city, &item.job_state, &item.job_country]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect();
    let location = if location_parts.is_empty() {
        None
    } else {
        Some(location_parts.join(", "))
    };

    let source_url = item
        .job_apply_link
        .filter(|url| !url.is_empty())
        .or(item.job_url.filter(|url| !url.is_empty()));

    Some(JobRecord {
        title,
        company,
        description,
        location,
        source_url,
        source: JobSource::Jsearch,
    })
}
