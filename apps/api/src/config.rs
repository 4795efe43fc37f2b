use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// API keys are all optional: a missing key degrades the corresponding
/// pipeline to its mock path instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub jsearch_api_key: Option<String>,
    pub jsearch_api_host: String,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    /// Ceiling for the structured-API, resume, and HTML-source requests.
    pub http_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jsearch_api_key: optional_env("JSEARCH_API_KEY"),
            jsearch_api_host: std::env::var("JSEARCH_API_HOST")
                .unwrap_or_else(|_| "jsearch.p.rapidapi.com".to_string()),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        })
    }
}

/// Treats unset and blank environment variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
