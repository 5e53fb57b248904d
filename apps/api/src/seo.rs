//! Page metadata — document title, description and canonical URL per page.

use serde::Serialize;

const SITE_NAME: &str = "Job Portal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

impl PageMeta {
    fn new(origin: &str, title: String, description: &str, path: &str) -> Self {
        PageMeta {
            title,
            description: description.to_string(),
            canonical_url: format!("{}{}", origin.trim_end_matches('/'), path),
        }
    }

    pub fn home(origin: &str) -> Self {
        Self::new(
            origin,
            format!("{SITE_NAME} – Find your next role"),
            "Search jobs with boolean operators. Explore jobs, posts, people, groups, and companies.",
            "/",
        )
    }

    /// Search results page. The query, when present, prefixes the title.
    pub fn search(origin: &str, query: &str) -> Self {
        let prefix = if query.is_empty() {
            String::new()
        } else {
            format!("{query} – ")
        };
        Self::new(
            origin,
            format!("{prefix}Search Results | {SITE_NAME}"),
            "Search jobs, posts, people, groups and companies with boolean operators.",
            crate::search::navigation::SEARCH_PATH,
        )
    }

    pub fn resume(origin: &str) -> Self {
        Self::new(
            origin,
            "Resume Builder – AI powered".to_string(),
            "Generate and optimize your resume with AI.",
            "/resume",
        )
    }
}
