//! Prompt construction for the batch scoring call.

use crate::models::job::{CandidateProfile, JobRecord};

/// System message sent to chat-style providers.
pub const SCORING_SYSTEM: &str = "You are an expert career advisor and recruiter. \
    Analyze job postings against a candidate's profile and provide fit scores.";

/// Per-job description cap inside the prompt (the full record keeps more).
const PROMPT_DESCRIPTION_CHARS: usize = 500;

/// Scoring-band guidance and the required response line format.
const SCORING_INSTRUCTIONS: &str = r#"
For each job, provide a score from 0-100 where:
- 90-100: Excellent match (perfect skills alignment, ideal role)
- 80-89: Very good match (strong skills overlap, good role fit)
- 70-79: Good match (decent skills alignment, some missing elements)
- 60-69: Fair match (some relevant skills, role partially suitable)
- 50-59: Below average match (limited relevance)
- 0-49: Poor match (little to no alignment)

Respond in this exact format for each job:
Job 1: [score] - [brief explanation]
Job 2: [score] - [brief explanation]
etc.
"#;

/// Builds the scoring prompt: candidate profile, numbered jobs 1..n, and the
/// scoring bands with the required response format.
pub fn build_scoring_prompt(profile: &CandidateProfile, jobs: &[JobRecord]) -> String {
    let skills = if profile.skills.is_empty() {
        "Not specified".to_string()
    } else {
        profile.skills.join(", ")
    };

    let mut prompt = format!(
        "Please analyze the following job postings against this candidate's profile \
         and provide fit scores from 0-100 for each job.\n\n\
         CANDIDATE PROFILE:\n\
         Skills: {skills}\n\
         Experience: {}\n\
         Resume: {}\n\n\
         JOBS TO SCORE:\n",
        profile.experience, profile.resume_text
    );

    for (i, job) in jobs.iter().enumerate() {
        let description: String = job
            .description
            .chars()
            .take(PROMPT_DESCRIPTION_CHARS)
            .collect();
        let location = job.location.as_deref().unwrap_or("Not specified");

        prompt.push_str(&format!(
            "\nJob {}:\nTitle: {}\nCompany: {}\nDescription: {}...\nLocation: {}\n",
            i + 1,
            job.title,
            job.company,
            description,
            location
        ));
    }

    prompt.push_str(SCORING_INSTRUCTIONS);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobSource;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            resume_text: "Resume content not available for analysis.".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            experience: "5 years of backend development".to_string(),
        }
    }

    fn job(title: &str, description: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            company: "Acme".to_string(),
            description: description.to_string(),
            location: None,
            source_url: None,
            source: JobSource::Jsearch,
        }
    }

    #[test]
    fn test_prompt_includes_profile_and_jobs() {
        let jobs = vec![job("Backend Engineer", "Own the API layer")];
        let prompt = build_scoring_prompt(&profile(), &jobs);

        assert!(prompt.contains("Skills: Rust, SQL"));
        assert!(prompt.contains("Experience: 5 years of backend development"));
        assert!(prompt.contains("Job 1:"));
        assert!(prompt.contains("Title: Backend Engineer"));
        assert!(prompt.contains("Location: Not specified"));
    }

    #[test]
    fn test_prompt_numbers_jobs_from_one() {
        let jobs = vec![job("A", "a"), job("B", "b"), job("C", "c")];
        let prompt = build_scoring_prompt(&profile(), &jobs);

        assert!(prompt.contains("Job 1:"));
        assert!(prompt.contains("Job 2:"));
        assert!(prompt.contains("Job 3:"));
        assert!(!prompt.contains("Job 4:\nTitle"));
    }

    #[test]
    fn test_prompt_states_response_format_and_bands() {
        let prompt = build_scoring_prompt(&profile(), &[job("A", "a")]);

        assert!(prompt.contains("90-100: Excellent match"));
        assert!(prompt.contains("0-49: Poor match"));
        assert!(prompt.contains("Job 1: [score] - [brief explanation]"));
    }

    #[test]
    fn test_empty_skills_shown_as_not_specified() {
        let mut p = profile();
        p.skills.clear();
        let prompt = build_scoring_prompt(&p, &[job("A", "a")]);

        assert!(prompt.contains("Skills: Not specified"));
    }

    #[test]
    fn test_description_truncated_in_prompt() {
        let long = "d".repeat(900);
        let prompt = build_scoring_prompt(&profile(), &[job("A", &long)]);

        let rendered = format!("Description: {}...", "d".repeat(500));
        assert!(prompt.contains(&rendered));
        assert!(!prompt.contains(&"d".repeat(501)));
    }
}
