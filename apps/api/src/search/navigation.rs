//! Search route parameters and links back into the search page.

use reqwest::Url;
use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};

use crate::search::filter::{DatePosted, Experience, FilterSelection};

pub const SEARCH_PATH: &str = "/search";

// Only used to drive the form-encoder; never leaves this module.
const LINK_BASE: &str = "http://localhost";

/// Query parameters accepted by the search page.
///
/// `loc` comes from the search bar and seeds the location filter; an explicit
/// `location` filter wins over it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub loc: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date_posted: Option<DatePosted>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub experience: Option<Experience>,
    pub company: Option<String>,
    #[serde(default)]
    pub remote_only: bool,
    #[serde(default)]
    pub easy_apply_only: bool,
    /// Id of the job shown in the detail pane.
    pub job: Option<String>,
}

impl SearchParams {
    /// The trimmed query text; empty when absent.
    pub fn query_text(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or_default()
    }

    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            date_posted: self.date_posted,
            experience: self.experience,
            company: non_blank(self.company.as_deref()),
            location: non_blank(self.location.as_deref())
                .or_else(|| non_blank(self.loc.as_deref())),
            remote_only: self.remote_only,
            easy_apply_only: self.easy_apply_only,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Reads an optional enum parameter, treating `date_posted=` like an absent one.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: StrDeserializer<'_, D::Error> = value.into_deserializer();
            T::deserialize(value).map(Some)
        }
    }
}

/// Builds the `/search` link for a query and location. `None` when both are blank.
pub fn search_href(query: &str, location: &str) -> Option<String> {
    let query = query.trim();
    let location = location.trim();
    if query.is_empty() && location.is_empty() {
        return None;
    }

    let mut url = Url::parse(LINK_BASE).ok()?.join(SEARCH_PATH).ok()?;
    {
        let mut pairs = url.query_pairs_mut();
        if !query.is_empty() {
            pairs.append_pair("q", query);
        }
        if !location.is_empty() {
            pairs.append_pair("loc", location);
        }
    }

    Some(match url.query() {
        Some(qs) => format!("{}?{}", url.path(), qs),
        None => url.path().to_string(),
    })
}
