//! Synthetic job data, returned only when every real source fails.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::job::{JobRecord, JobSource};

const COMPANIES: &[&str] = &[
    "TechCorp",
    "InnovateLab",
    "DataSoft",
    "CloudSystems",
    "AIStartup",
    "DevStudio",
    "CodeCraft",
    "ByteDance",
    "TechFlow",
    "DigitalHub",
    "Microsoft",
    "Google",
    "Amazon",
    "Meta",
    "Apple",
];

const JOB_LEVELS: &[&str] = &["Senior", "Junior", "Lead", "Principal", "Staff"];

const CITIES: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Seattle, WA",
    "Austin, TX",
    "Remote",
];

const MAX_MOCK_JOBS: usize = 15;

/// Generates `min(limit, 15)` synthetic jobs for the keyword/location.
pub fn mock_jobs(keyword: &str, location: &str, limit: usize) -> Vec<JobRecord> {
    mock_jobs_with(&mut rand::thread_rng(), keyword, location, limit)
}

/// Seedable variant; production callers go through [`mock_jobs`].
///
/// Level/company combinations are drawn without replacement so the generated
/// list never contains two records with the same lowercase (title, company)
/// pair, matching the dedup guarantee of the real sources.
pub fn mock_jobs_with<R: Rng>(
    rng: &mut R,
    keyword: &str,
    location: &str,
    limit: usize,
) -> Vec<JobRecord> {
    let display_keyword = title_case(keyword);
    let lower_keyword = keyword.to_lowercase();

    let mut combinations: Vec<(&str, &str)> = JOB_LEVELS
        .iter()
        .flat_map(|level| COMPANIES.iter().map(move |company| (*level, *company)))
        .collect();
    combinations.shuffle(rng);

    combinations
        .into_iter()
        .take(limit.min(MAX_MOCK_JOBS))
        .enumerate()
        .map(|(i, (level, company))| {
            let job_location = if location.is_empty() {
                pick(rng, CITIES).to_string()
            } else {
                location.to_string()
            };

            JobRecord {
                title: format!("{level} {display_keyword}"),
                company: company.to_string(),
                description: format!(
                    "We are looking for a skilled {keyword} to join our team at {company}. \
                     The ideal candidate will have experience in {lower_keyword} and related \
                     technologies. This is a great opportunity to work with cutting-edge \
                     technology and grow your career. Responsibilities include developing \
                     software solutions, collaborating with cross-functional teams, and \
                     contributing to our innovative products."
                ),
                location: Some(job_location),
                source_url: Some(format!("https://example.com/job/{}", i + 1)),
                source: JobSource::Mock,
            }
        })
        .collect()
}

fn pick<'a, R: Rng>(rng: &mut R, options: &'a [&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or("")
}

/// Uppercases the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
