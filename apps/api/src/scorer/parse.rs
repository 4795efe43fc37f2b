//! Parsing of the provider's free-text scoring response.

use crate::models::job::{JobRecord, ScoredJobRecord};

const DEFAULT_SCORE: i64 = 50;
const DEFAULT_EXPLANATION: &str = "AI analysis completed";

/// Locates one `Job N: [score] - [explanation]` line per job in the response.
/// Jobs without a parseable line get the defaults; scores are clamped to
/// [0, 100] by the record constructor.
pub fn parse_scores(jobs: &[JobRecord], response: &str) -> Vec<ScoredJobRecord> {
    jobs.iter()
        .cloned()
        .enumerate()
        .map(|(i, job)| {
            let (score, explanation) = parse_line_for(response, i + 1);
            ScoredJobRecord::new(job, score, explanation)
        })
        .collect()
}

/// Parses the first line mentioning `Job {n}:`. Splits once on `" - "`,
/// reads the score as the integer after the first colon of the left segment.
fn parse_line_for(response: &str, n: usize) -> (i64, String) {
    let marker = format!("Job {n}:");

    for line in response.lines() {
        if !line.contains(&marker) {
            continue;
        }

        let mut parts = line.splitn(2, " - ");
        let head = parts.next().unwrap_or("");
        let Some(explanation) = parts.next() else {
            break;
        };
        let Some(score_text) = head.split(':').nth(1) else {
            break;
        };
        match score_text.trim().parse::<i64>() {
            Ok(score) => return (score, explanation.trim().to_string()),
            Err(_) => break,
        }
    }

    (DEFAULT_SCORE, DEFAULT_EXPLANATION.to_string())
}
