//! Duplicate removal for aggregated job lists.

use std::collections::HashSet;

use crate::models::job::JobRecord;

/// Identity used for duplicate detection: lowercase-trimmed (title, company).
/// Two records sharing this pair are duplicates regardless of source.
fn dedup_key(job: &JobRecord) -> String {
    format!(
        "{}|{}",
        job.title.trim().to_lowercase(),
        job.company.trim().to_lowercase()
    )
}

/// Removes duplicate jobs, keeping the first occurrence and preserving order.
pub fn remove_duplicates(jobs: Vec<JobRecord>) -> Vec<JobRecord> {
    let mut seen = HashSet::new();
    jobs.into_iter()
        .filter(|job| seen.insert(dedup_key(job)))
        .collect()
}
