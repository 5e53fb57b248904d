//! Suggestion client — asks the configured endpoint first, then the static list.
//!
//! Failures never reach the caller: a broken endpoint falls back to the static
//! list, and the static list cannot fail.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::suggestion::Suggestion;

/// Upper bound on results served from the static list.
pub const MAX_FALLBACK_SUGGESTIONS: usize = 8;

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("suggestion endpoint returned status {0}")]
    Status(u16),
}

/// Anything that can answer a suggestion lookup.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, SuggestionError>;
}

/// `GET <url>?q=<query>` returning a JSON array of suggestions.
pub struct RemoteSuggestions {
    http: Client,
    url: String,
}

impl RemoteSuggestions {
    pub fn new(http: Client, url: String) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl SuggestionSource for RemoteSuggestions {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, SuggestionError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestionError::Status(status.as_u16()));
        }

        Ok(response.json::<Vec<Suggestion>>().await?)
    }
}

/// The bundled suggestion list, filtered by label/sublabel substring.
#[derive(Clone)]
pub struct StaticSuggestions {
    entries: Arc<Vec<Suggestion>>,
}

impl StaticSuggestions {
    pub fn new(entries: Vec<Suggestion>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// The unfiltered list, as served at `/suggestions.json`.
    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    pub fn search(&self, query: &str) -> Vec<Suggestion> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|s| s.matches(&needle))
            .take(MAX_FALLBACK_SUGGESTIONS)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SuggestionSource for StaticSuggestions {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, SuggestionError> {
        Ok(self.search(query))
    }
}

/// Remote-first suggestion lookup with the static list as fallback.
pub struct SuggestionClient {
    remote: Option<RemoteSuggestions>,
    fallback: StaticSuggestions,
}

impl SuggestionClient {
    pub fn new(remote: Option<RemoteSuggestions>, fallback: StaticSuggestions) -> Self {
        Self { remote, fallback }
    }

    pub fn fallback(&self) -> &StaticSuggestions {
        &self.fallback
    }

    /// Suggestions for `query`. An empty query yields nothing and issues no request.
    pub async fn fetch(&self, query: &str) -> Vec<Suggestion> {
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(remote) = &self.remote {
            match remote.lookup(query).await {
                Ok(items) => {
                    debug!("Remote suggestions for {query:?}: {}", items.len());
                    return items;
                }
                Err(e) => warn!("Suggestion endpoint failed, using static list: {e}"),
            }
        }

        self.fallback.search(query)
    }
}

#[async_trait]
impl SuggestionSource for SuggestionClient {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, SuggestionError> {
        Ok(self.fetch(query).await)
    }
}
