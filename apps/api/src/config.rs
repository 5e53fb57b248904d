use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Origin used to build canonical page URLs.
    pub site_origin: String,
    /// Remote autocomplete endpoint (`GET <url>?q=`). Static list when unset.
    pub suggestions_url: Option<String>,
    /// Remote resume generation endpoint (`POST <url>`). Local template when unset.
    pub resume_edge_url: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub suggestions_path: Option<PathBuf>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = optional_env("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            port,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            site_origin: optional_env("SITE_ORIGIN")
                .unwrap_or_else(|| format!("http://localhost:{port}")),
            suggestions_url: optional_env("SUGGESTIONS_URL"),
            resume_edge_url: optional_env("RESUME_EDGE_URL"),
            catalog_path: optional_env("CATALOG_PATH").map(PathBuf::from),
            suggestions_path: optional_env("SUGGESTIONS_PATH").map(PathBuf::from),
            http_timeout: Duration::from_secs(
                optional_env("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse::<u64>()
                    .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

/// Reads `key`, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Offline defaults for handler tests.
    pub fn for_tests() -> Self {
        Config {
            port: 8080,
            rust_log: "debug".to_string(),
            site_origin: "http://jobs.test".to_string(),
            suggestions_url: None,
            resume_edge_url: None,
            catalog_path: None,
            suggestions_path: None,
            http_timeout: Duration::from_secs(5),
        }
    }
}
