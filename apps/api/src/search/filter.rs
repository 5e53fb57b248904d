//! Job filter — applies a parsed query plus the sidebar filter selection to the catalog.

use serde::{Deserialize, Serialize};

use crate::models::job::Job;
use crate::search::query_parser::ParsedQuery;

const HOURS_PER_DAY: u32 = 24;
const HOURS_PER_WEEK: u32 = 24 * 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePosted {
    #[serde(rename = "24h")]
    Past24Hours,
    #[serde(rename = "week")]
    PastWeek,
}

impl DatePosted {
    fn max_hours(self) -> u32 {
        match self {
            DatePosted::Past24Hours => HOURS_PER_DAY,
            DatePosted::PastWeek => HOURS_PER_WEEK,
        }
    }
}

/// Experience level bucket. Only `Entry` narrows results; the others are
/// selectable but carry no predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Entry,
    Mid,
    Director,
}

/// Transient filter state from the search page. `Default` means "no filters".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub date_posted: Option<DatePosted>,
    pub experience: Option<Experience>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub remote_only: bool,
    pub easy_apply_only: bool,
}

impl FilterSelection {
    pub fn accepts(&self, job: &Job) -> bool {
        if let Some(date) = self.date_posted {
            if job.posted_at_hours_ago > date.max_hours() {
                return false;
            }
        }
        if self.experience == Some(Experience::Entry)
            && !(job.has_tag_containing("intern") || job.has_tag_containing("entry"))
        {
            return false;
        }
        if let Some(company) = &self.company {
            if &job.company != company {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !job
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        if self.remote_only && !job.has_tag_containing("remote") {
            return false;
        }
        if self.easy_apply_only && !job.easy_apply {
            return false;
        }
        true
    }
}

/// Returns the jobs matching both the query and the selection, in catalog order.
pub fn filter_jobs<'a>(
    jobs: &'a [Job],
    query: &ParsedQuery,
    selection: &FilterSelection,
) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| query.matches(&job.haystack()) && selection.accepts(job))
        .collect()
}
