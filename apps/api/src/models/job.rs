use serde::{Deserialize, Serialize};

/// A single job posting from the catalog. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_at_hours_ago: u32,
    #[serde(default)]
    pub promoted: bool,
    #[serde(default)]
    pub easy_apply: bool,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter: Option<Recruiter>,
    /// Skills and keywords. A missing list behaves like an empty one.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Employment type, e.g. "Full-time" or "Contract".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Job {
    /// Searchable text: title, company, location and tags joined by single spaces.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.company,
            self.location,
            self.tags.join(" ")
        )
    }

    pub fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
    }
}

/// Compact listing view of a job, as shown in the result list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted: String,
    pub promoted: bool,
    pub easy_apply: bool,
    pub badges: Vec<String>,
}

const MAX_CARD_BADGES: usize = 3;

impl From<&Job> for JobCard {
    fn from(job: &Job) -> Self {
        JobCard {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            posted: format!("Posted {}h ago", job.posted_at_hours_ago),
            promoted: job.promoted,
            easy_apply: job.easy_apply,
            badges: job.tags.iter().take(MAX_CARD_BADGES).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_json() -> &'static str {
        r#"{
            "id": "j9",
            "title": "Platform Engineer",
            "company": "Acme",
            "location": "Remote, EU",
            "postedAtHoursAgo": 12,
            "easyApply": true,
            "description": "Keep the lights on.",
            "responsibilities": ["Run things"],
            "qualifications": ["Rust"],
            "tags": ["Rust", "Remote", "Kubernetes", "Linux"],
            "type": "Contract"
        }"#
    }

    #[test]
    fn test_job_deserializes_camel_case_fields() {
        let job: Job = serde_json::from_str(job_json()).unwrap();
        assert_eq!(job.posted_at_hours_ago, 12);
        assert!(job.easy_apply);
        assert!(!job.promoted);
        assert_eq!(job.employment_type.as_deref(), Some("Contract"));
        assert!(job.recruiter.is_none());
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let job: Job = serde_json::from_str(
            r#"{"id":"x","title":"T","company":"C","location":"L","postedAtHoursAgo":1,"description":"d"}"#,
        )
        .unwrap();
        assert!(job.tags.is_empty());
        assert_eq!(job.haystack(), "T C L ");
    }

    #[test]
    fn test_haystack_joins_fields_with_single_spaces() {
        let job: Job = serde_json::from_str(job_json()).unwrap();
        assert_eq!(
            job.haystack(),
            "Platform Engineer Acme Remote, EU Rust Remote Kubernetes Linux"
        );
    }

    #[test]
    fn test_card_keeps_first_three_tags() {
        let job: Job = serde_json::from_str(job_json()).unwrap();
        let card = JobCard::from(&job);
        assert_eq!(card.badges, vec!["Rust", "Remote", "Kubernetes"]);
        assert_eq!(card.posted, "Posted 12h ago");
    }
}
