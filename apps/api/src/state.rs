use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::resume::client::ResumeGenerator;
use crate::suggestions::client::SuggestionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable after startup.
    pub catalog: Arc<Catalog>,
    pub suggestions: Arc<SuggestionClient>,
    /// Remote endpoint when configured, local template otherwise.
    pub resume: Arc<dyn ResumeGenerator>,
    pub config: Config,
}
