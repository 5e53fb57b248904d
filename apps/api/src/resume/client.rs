//! Resume generation client — the only place the AI generation endpoint is called.
//!
//! With `RESUME_EDGE_URL` set, form fields are POSTed as JSON and the endpoint
//! answers `{"content": "..."}`. Without it, the local template stands in.
//! No retries: a failed call is reported once and the caller shows a message.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::resume::template::{render_resume, ResumeGenInput};

#[derive(Debug, Error)]
pub enum ResumeGenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resume generation failed: {status}")]
    Status { status: u16 },
}

/// Which generator produced a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeBackend {
    Remote,
    Template,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedResume {
    pub content: String,
}

/// Pluggable resume generator, carried in `AppState` as `Arc<dyn ResumeGenerator>`.
#[async_trait]
pub trait ResumeGenerator: Send + Sync {
    async fn generate(&self, input: &ResumeGenInput) -> Result<GeneratedResume, ResumeGenError>;

    fn backend(&self) -> ResumeBackend;
}

/// POSTs the form to a configured AI endpoint.
pub struct RemoteResumeGenerator {
    http: Client,
    url: String,
}

impl RemoteResumeGenerator {
    pub fn new(http: Client, url: String) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl ResumeGenerator for RemoteResumeGenerator {
    async fn generate(&self, input: &ResumeGenInput) -> Result<GeneratedResume, ResumeGenError> {
        let response = self.http.post(&self.url).json(input).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResumeGenError::Status {
                status: status.as_u16(),
            });
        }

        let generated: GeneratedResume = response.json().await?;
        debug!("Remote resume generated: {} chars", generated.content.len());
        Ok(generated)
    }

    fn backend(&self) -> ResumeBackend {
        ResumeBackend::Remote
    }
}

/// Offline generator backed by the Markdown template. Never fails.
pub struct TemplateResumeGenerator;

#[async_trait]
impl ResumeGenerator for TemplateResumeGenerator {
    async fn generate(&self, input: &ResumeGenInput) -> Result<GeneratedResume, ResumeGenError> {
        Ok(GeneratedResume {
            content: render_resume(input),
        })
    }

    fn backend(&self) -> ResumeBackend {
        ResumeBackend::Template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_template_generator_renders_locally() {
        let input = ResumeGenInput {
            full_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let out = TemplateResumeGenerator.generate(&input).await.unwrap();
        assert!(out.content.starts_with("# Jane Doe\nSoftware Engineer"));
        assert_eq!(TemplateResumeGenerator.backend(), ResumeBackend::Template);
    }

    #[tokio::test]
    async fn test_remote_generator_posts_form_fields() {
        let router = Router::new().route(
            "/generate",
            post(|Json(input): Json<ResumeGenInput>| async move {
                let name = input.full_name.unwrap_or_default();
                let role = input.target_role.unwrap_or_default();
                Json(GeneratedResume {
                    content: format!("# {name}\nAiming for {role}"),
                })
            }),
        );
        let base = serve(router).await;

        let generator = RemoteResumeGenerator::new(Client::new(), format!("{base}/generate"));
        let input = ResumeGenInput {
            full_name: Some("Ravi".to_string()),
            target_role: Some("SRE".to_string()),
            ..Default::default()
        };

        let out = generator.generate(&input).await.unwrap();
        assert_eq!(out.content, "# Ravi\nAiming for SRE");
        assert_eq!(generator.backend(), ResumeBackend::Remote);
    }

    #[tokio::test]
    async fn test_remote_error_status_is_reported() {
        let router = Router::new().route(
            "/generate",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let base = serve(router).await;

        let generator = RemoteResumeGenerator::new(Client::new(), format!("{base}/generate"));
        let err = generator
            .generate(&ResumeGenInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ResumeGenError::Status { status: 502 }));
        assert_eq!(err.to_string(), "Resume generation failed: 502");
    }

    #[tokio::test]
    async fn test_remote_malformed_body_is_an_error() {
        let router = Router::new().route("/generate", post(|| async { "{\"text\": 1}" }));
        let base = serve(router).await;

        let generator = RemoteResumeGenerator::new(Client::new(), format!("{base}/generate"));
        let err = generator
            .generate(&ResumeGenInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ResumeGenError::Http(_)));
    }
}
