pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers as resume;
use crate::search::handlers as search;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/suggestions.json",
            get(suggestions::handle_static_suggestions),
        )
        // Search page
        .route("/api/v1/home", get(search::handle_home))
        .route("/api/v1/search", get(search::handle_search))
        .route("/api/v1/search/href", get(search::handle_search_href))
        .route("/api/v1/jobs/:id", get(search::handle_get_job))
        .route("/api/v1/posts", get(search::handle_posts))
        .route("/api/v1/people", get(search::handle_people))
        .route("/api/v1/groups", get(search::handle_groups))
        .route("/api/v1/companies", get(search::handle_companies))
        // Autocomplete
        .route("/api/v1/suggestions", get(suggestions::handle_suggestions))
        // Resume builder
        .route("/api/v1/resume", get(resume::handle_resume_builder))
        .route(
            "/api/v1/resume/generate",
            post(resume::handle_generate_resume),
        )
        .with_state(state)
}
