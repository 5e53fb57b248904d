//! Axum route handlers for the resume builder.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::client::ResumeBackend;
use crate::resume::template::{ResumeGenInput, TEMPLATE_CHOICES};
use crate::seo::PageMeta;
use crate::state::AppState;

const LOCAL_TEMPLATE_NOTICE: &str = "Using local AI stub. Set RESUME_EDGE_URL to enable real AI generation.";

#[derive(Debug, Serialize)]
pub struct ResumeBuilderResponse {
    pub meta: PageMeta,
    pub backend: ResumeBackend,
    pub notice: Option<&'static str>,
    pub templates: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResumeResponse {
    pub resume_id: Uuid,
    pub content: String,
    pub backend: ResumeBackend,
    pub generated_at: DateTime<Utc>,
}

/// GET /api/v1/resume
///
/// Describes the builder page: metadata, active backend and template choices.
pub async fn handle_resume_builder(State(state): State<AppState>) -> Json<ResumeBuilderResponse> {
    let backend = state.resume.backend();
    Json(ResumeBuilderResponse {
        meta: PageMeta::resume(&state.config.site_origin),
        backend,
        notice: (backend == ResumeBackend::Template).then_some(LOCAL_TEMPLATE_NOTICE),
        templates: TEMPLATE_CHOICES.to_vec(),
    })
}

/// POST /api/v1/resume/generate
///
/// Failures surface as a 502 carrying the "Generation failed" message.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(input): Json<ResumeGenInput>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    let backend = state.resume.backend();
    let generated = state.resume.generate(&input).await?;

    let resume_id = Uuid::new_v4();
    info!("Generated resume {resume_id} via {backend:?}");

    Ok(Json(GenerateResumeResponse {
        resume_id,
        content: generated.content,
        backend,
        generated_at: Utc::now(),
    }))
}
