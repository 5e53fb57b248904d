mod catalog;
mod config;
mod errors;
mod models;
mod resume;
mod routes;
mod search;
mod seo;
mod state;
mod suggestions;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{load_suggestions, Catalog};
use crate::config::Config;
use crate::resume::client::{RemoteResumeGenerator, ResumeGenerator, TemplateResumeGenerator};
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestions::client::{RemoteSuggestions, StaticSuggestions, SuggestionClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job search API v{}", env!("CARGO_PKG_VERSION"));

    // Static data
    let catalog = Catalog::load(config.catalog_path.as_deref()).context("loading job catalog")?;
    let fallback = StaticSuggestions::new(
        load_suggestions(config.suggestions_path.as_deref())
            .context("loading static suggestions")?,
    );

    // Outbound HTTP, shared by both optional endpoints
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("building HTTP client")?;

    let remote_suggestions = config.suggestions_url.clone().map(|url| {
        info!("Suggestions endpoint: {url}");
        RemoteSuggestions::new(http.clone(), url)
    });
    if remote_suggestions.is_none() {
        info!("No SUGGESTIONS_URL set, serving the static suggestion list");
    }
    let suggestions = SuggestionClient::new(remote_suggestions, fallback);

    let resume: Arc<dyn ResumeGenerator> = match config.resume_edge_url.clone() {
        Some(url) => {
            info!("Resume generation endpoint: {url}");
            Arc::new(RemoteResumeGenerator::new(http.clone(), url))
        }
        None => {
            info!("No RESUME_EDGE_URL set, using the local resume template");
            Arc::new(TemplateResumeGenerator)
        }
    };

    // Build app state
    let state = AppState {
        catalog: Arc::new(catalog),
        suggestions: Arc::new(suggestions),
        resume,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
