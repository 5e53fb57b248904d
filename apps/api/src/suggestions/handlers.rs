use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::suggestion::Suggestion;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/v1/suggestions?q=
///
/// Always answers with a list; endpoint failures fall back to the static list.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionQuery>,
) -> Json<Vec<Suggestion>> {
    Json(state.suggestions.fetch(&params.q).await)
}

/// GET /suggestions.json
pub async fn handle_static_suggestions(State(state): State<AppState>) -> Json<Vec<Suggestion>> {
    Json(state.suggestions.fallback().entries().to_vec())
}
