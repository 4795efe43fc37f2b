//! Deterministic fallback scores used when no provider is available or a
//! provider call fails.

use crate::models::job::{JobRecord, ScoredJobRecord};

const MOCK_EXPLANATION: &str =
    "Mock AI analysis: Good match based on job requirements and candidate profile.";

/// Scores a batch with a mildly decreasing curve over batch position,
/// bounded to [40, 95]. Not a real assessment.
pub fn mock_scores(jobs: &[JobRecord]) -> Vec<ScoredJobRecord> {
    jobs.iter()
        .cloned()
        .enumerate()
        .map(|(i, job)| ScoredJobRecord::new(job, mock_score(i), MOCK_EXPLANATION.to_string()))
        .collect()
}

/// `clamp(40, 95, (85 - 3i) + (i % 3) * 5)` for 0-based batch position `i`.
pub(crate) fn mock_score(i: usize) -> i64 {
    let i = i as i64;
    ((85 - 3 * i) + (i % 3) * 5).clamp(40, 95)
}
