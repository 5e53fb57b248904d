//! Axum route handlers for the search page and its directory tabs.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::directory::{Company, Group, Person, Post};
use crate::models::job::{Job, JobCard};
use crate::search::filter::{filter_jobs, FilterSelection};
use crate::search::navigation::{search_href, SearchParams};
use crate::search::query_parser::{parse_boolean_query, ParsedQuery};
use crate::seo::PageMeta;
use crate::state::AppState;

const NO_RESULTS_NOTICE: &str = "No jobs match your filters.";
const SEARCH_HINT: &str = "Use AND, OR, NOT to refine your search. Try: Java AND Developer NOT Senior";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub meta: PageMeta,
    pub query: String,
    pub parsed: ParsedQuery,
    pub filters: FilterSelection,
    pub total: usize,
    pub jobs: Vec<JobCard>,
    /// Job shown in the detail pane: the selected one if it survived filtering,
    /// otherwise the first result.
    pub detail: Option<Job>,
    pub notice: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub meta: PageMeta,
    pub hint: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct HrefQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub loc: String,
}

#[derive(Debug, Serialize)]
pub struct HrefResponse {
    pub href: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/home
pub async fn handle_home(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(HomeResponse {
        meta: PageMeta::home(&state.config.site_origin),
        hint: SEARCH_HINT,
    })
}

/// GET /api/v1/search
///
/// Boolean query over the catalog plus sidebar filters. Results keep catalog order.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = params.query_text().to_string();
    let parsed = parse_boolean_query(&query);
    let filters = params.selection();

    let matches = filter_jobs(&state.catalog.jobs, &parsed, &filters);
    debug!(
        "Search {query:?}: {} of {} jobs",
        matches.len(),
        state.catalog.jobs.len()
    );

    let detail = params
        .job
        .as_deref()
        .and_then(|id| matches.iter().find(|j| j.id == id))
        .or_else(|| matches.first())
        .map(|j| (*j).clone());

    Json(SearchResponse {
        meta: PageMeta::search(&state.config.site_origin, &query),
        total: matches.len(),
        jobs: matches.iter().map(|j| JobCard::from(*j)).collect(),
        notice: matches.is_empty().then_some(NO_RESULTS_NOTICE),
        detail,
        query,
        parsed,
        filters,
    })
}

/// GET /api/v1/search/href?q=&loc=
pub async fn handle_search_href(
    Query(params): Query<HrefQuery>,
) -> Result<Json<HrefResponse>, AppError> {
    let href = search_href(&params.q, &params.loc)
        .ok_or_else(|| AppError::Validation("q or loc is required".to_string()))?;
    Ok(Json(HrefResponse { href }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state
        .catalog
        .job(&job_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

/// GET /api/v1/posts
pub async fn handle_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.catalog.posts.clone())
}

/// GET /api/v1/people
pub async fn handle_people(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.catalog.people.clone())
}

/// GET /api/v1/groups
pub async fn handle_groups(State(state): State<AppState>) -> Json<Vec<Group>> {
    Json(state.catalog.groups.clone())
}

/// GET /api/v1/companies
pub async fn handle_companies(State(state): State<AppState>) -> Json<Vec<Company>> {
    Json(state.catalog.companies.clone())
}
