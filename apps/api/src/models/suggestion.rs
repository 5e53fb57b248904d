use serde::{Deserialize, Serialize};

/// An autocomplete entry, shared by the remote endpoint and the static list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    /// Category label such as "Job Title", "Company" or "Skill".
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Suggestion {
    /// Case-insensitive substring match on label or sublabel.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        std::iter::once(self.label.as_str())
            .chain(self.sublabel.as_deref())
            .any(|text| text.to_lowercase().contains(needle))
    }
}
