use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_LINK: &str = "#";
pub const EMPLOYMENT_TYPE: &str = "Full-time";
pub const EXPERIENCE_UNSPECIFIED: &str = "Unspecified";

/// Filters for one search. Built per request and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub keywords: String,
    pub location: String,
    pub remote_only: bool,
    pub experience_level: String,
    pub max_results: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub published_at: String,
    pub apply_url: String,
    pub employment_type: String,
    pub experience_level: String,
    pub description: String,
}

impl JobPosting {
    /// Posting as scraped from a listing card. Missing fields are passed as `None`
    /// and replaced by their placeholders.
    pub fn scraped(
        title: Option<String>,
        company: Option<String>,
        location: Option<String>,
        published_at: Option<String>,
        apply_url: Option<String>,
    ) -> JobPosting {
        let title = title.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let company = company.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let description = format!("Position of {title} at {company}");
        JobPosting {
            title,
            company,
            location: location.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            published_at: published_at.unwrap_or_else(now_iso8601),
            apply_url: apply_url.unwrap_or_else(|| NO_LINK.to_string()),
            employment_type: EMPLOYMENT_TYPE.to_string(),
            experience_level: EXPERIENCE_UNSPECIFIED.to_string(),
            description,
        }
    }
}

pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
