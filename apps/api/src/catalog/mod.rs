//! Static catalog — the mock jobs, directory records and suggestion list.
//!
//! Both documents ship embedded in the binary. `CATALOG_PATH` and
//! `SUGGESTIONS_PATH` point at JSON files with the same shape to replace them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::directory::{Company, Group, Person, Post};
use crate::models::job::Job;
use crate::models::suggestion::Suggestion;

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");
const EMBEDDED_SUGGESTIONS: &str = include_str!("../../data/suggestions.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate job id '{0}'")]
    DuplicateJobId(String),
}

/// In-memory job catalog. Order of `jobs` is the order results are listed in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub companies: Vec<Company>,
}

impl Catalog {
    /// Loads the catalog from `path`, or the embedded one when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(p) => {
                info!("Loading catalog from {}", p.display());
                Self::from_json(&read_file(p)?)?
            }
            None => Self::from_json(EMBEDDED_CATALOG)?,
        };
        info!(
            "Catalog ready: {} jobs, {} posts, {} people, {} groups, {} companies",
            catalog.jobs.len(),
            catalog.posts.len(),
            catalog.people.len(),
            catalog.groups.len(),
            catalog.companies.len()
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for job in &self.jobs {
            if !seen.insert(job.id.as_str()) {
                return Err(CatalogError::DuplicateJobId(job.id.clone()));
            }
        }
        Ok(())
    }
}

/// Loads the static suggestion list from `path`, or the embedded one.
pub fn load_suggestions(path: Option<&Path>) -> Result<Vec<Suggestion>, CatalogError> {
    let suggestions: Vec<Suggestion> = match path {
        Some(p) => serde_json::from_str(&read_file(p)?)?,
        None => serde_json::from_str(EMBEDDED_SUGGESTIONS)?,
    };
    info!("Loaded {} static suggestions", suggestions.len());
    Ok(suggestions)
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
