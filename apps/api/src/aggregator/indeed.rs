//! Indeed HTML scraping with ordered CSS-selector fallbacks.
//!
//! Job boards change their markup regularly, so every field is extracted by
//! trying a prioritized list of selector candidates until one matches.

use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use crate::models::job::{normalize_description, JobRecord, JobSource};

const SEARCH_URL: &str = "https://www.indeed.com/jobs";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Job-card container candidates, tried in order until one yields results.
const JOB_CARD_SELECTORS: &[&str] = &[
    "div[data-jk]",
    ".job_seen_beacon",
    ".jobsearch-SerpJobCard",
    ".slider_container .slider_item",
];

const TITLE_SELECTORS: &[&str] = &[
    "h2.jobTitle a span",
    "h2.jobTitle span",
    ".jobTitle a",
    "[data-testid=\"job-title\"]",
];

const COMPANY_SELECTORS: &[&str] = &[
    ".companyName",
    "[data-testid=\"company-name\"]",
    ".company",
];

const LOCATION_SELECTORS: &[&str] = &[
    ".companyLocation",
    "[data-testid=\"job-location\"]",
    ".location",
];

const SUMMARY_SELECTORS: &[&str] = &[
    ".summary",
    ".job-snippet",
    "[data-testid=\"job-snippet\"]",
];

pub struct IndeedScraper {
    client: Client,
}

impl IndeedScraper {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build Indeed HTTP client")?;

        Ok(Self { client })
    }

    /// Fetches one results page and extracts up to `limit` job cards.
    pub async fn scrape(
        &self,
        keyword: &str,
        location: &str,
        limit: usize,
    ) -> Result<Vec<JobRecord>> {
        info!("Scraping Indeed for: {keyword} in {location}");

        // Single randomized delay before the request, to avoid naive
        // rate-limiting. Not a retry policy.
        let delay = rand::thread_rng().gen_range(1.0..3.0);
        tokio::time::sleep(Duration::from_secs_f64(delay)).await;

        let page_size = limit.min(50).to_string();
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("q", keyword),
                ("l", location),
                ("start", "0"),
                ("limit", page_size.as_str()),
            ])
            .send()
            .await
            .context("Indeed request failed")?
            .error_for_status()
            .context("Indeed returned an error status")?;

        let html = response
            .text()
            .await
            .context("Failed to read Indeed response body")?;

        Ok(extract_jobs(&html, limit))
    }
}

/// Parses a search-results page. Cards that fail extraction are skipped.
fn extract_jobs(html: &str, limit: usize) -> Vec<JobRecord> {
    let document = Html::parse_document(html);

    let mut cards: Vec<ElementRef> = Vec::new();
    for selector_str in JOB_CARD_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            cards = document.select(&selector).collect();
            if !cards.is_empty() {
                break;
            }
        }
    }

    if cards.is_empty() {
        warn!("No job cards found on Indeed page");
        return Vec::new();
    }

    cards
        .into_iter()
        .take(limit)
        .filter_map(extract_job_from_card)
        .collect()
}

/// Extracts one job from a card element, or `None` when title or company is
/// missing.
fn extract_job_from_card(card: ElementRef) -> Option<JobRecord> {
    let title = find_text_by_selectors(card, TITLE_SELECTORS)?;
    let company = find_text_by_selectors(card, COMPANY_SELECTORS)?;
    let location = find_text_by_selectors(card, LOCATION_SELECTORS);
    let summary = find_text_by_selectors(card, SUMMARY_SELECTORS).unwrap_or_default();

    let description = normalize_description(&summary, &title, &company);

    let source_url = card
        .value()
        .attr("data-jk")
        .map(|key| format!("https://www.indeed.com/viewjob?jk={key}"));

    Some(JobRecord {
        title,
        company,
        description,
        location,
        source_url,
        source: JobSource::Indeed,
    })
}

/// Tries each selector in order and returns the first non-empty text match.
fn find_text_by_selectors(card: ElementRef, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = card.select(&selector).next() {
                let text = clean_text(&element.text().collect::<Vec<_>>().join(" "));
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

/// Collapses runs of whitespace and newlines into single spaces.
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <html><body>
          <div data-jk="abc123">
            <h2 class="jobTitle"><a><span>Rust Engineer</span></a></h2>
            <span class="companyName">TechCorp</span>
            <div class="companyLocation">Remote</div>
            <div class="job-snippet">Build   fast
            services in Rust.</div>
          </div>
          <div data-jk="def456">
            <h2 class="jobTitle"><a><span>Data Engineer</span></a></h2>
            <span class="companyName">DataSoft</span>
          </div>
          <div data-jk="ghi789">
            <h2 class="jobTitle"><a><span>Orphan Role</span></a></h2>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_jobs_from_primary_selector() {
        let jobs = extract_jobs(RESULTS_PAGE, 10);
        assert_eq!(jobs.len(), 2);

        assert_eq!(jobs[0].title, "Rust Engineer");
        assert_eq!(jobs[0].company, "TechCorp");
        assert_eq!(jobs[0].location.as_deref(), Some("Remote"));
        assert_eq!(jobs[0].description, "Build fast services in Rust.");
        assert_eq!(
            jobs[0].source_url.as_deref(),
            Some("https://www.indeed.com/viewjob?jk=abc123")
        );
        assert_eq!(jobs[0].source, JobSource::Indeed);
    }

    #[test]
    fn test_missing_company_drops_card() {
        let jobs = extract_jobs(RESULTS_PAGE, 10);
        assert!(jobs.iter().all(|j| j.title != "Orphan Role"));
    }

    #[test]
    fn test_missing_summary_synthesizes_description() {
        let jobs = extract_jobs(RESULTS_PAGE, 10);
        assert_eq!(
            jobs[1].description,
            "Job opportunity at DataSoft for Data Engineer position."
        );
    }

    #[test]
    fn test_limit_applies_to_cards() {
        let jobs = extract_jobs(RESULTS_PAGE, 1);
        assert_eq!(jobs.len(), 1);
    }

    #[test]
    fn test_fallback_card_selector() {
        // No data-jk containers; cards only match .job_seen_beacon.
        let html = r#"
            <div class="job_seen_beacon">
              <div data-testid="job-title">Platform Engineer</div>
              <div data-testid="company-name">CloudSystems</div>
              <div data-testid="job-location">Seattle, WA</div>
              <div data-testid="job-snippet">Run the platform.</div>
            </div>
        "#;
        let jobs = extract_jobs(html, 10);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Platform Engineer");
        assert_eq!(jobs[0].company, "CloudSystems");
        // No job key attribute on this card shape.
        assert!(jobs[0].source_url.is_none());
    }

    #[test]
    fn test_no_cards_yields_empty() {
        assert!(extract_jobs("<html><body><p>nothing</p></body></html>", 10).is_empty());
    }
}
