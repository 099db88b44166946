use serde::{Deserialize, Serialize};

use crate::data_models::{JobPosting, SearchFilters};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRequest {
    pub keywords: String,
    pub location: String,
    pub experience: String,
    /// Echoed back; the search page is not filtered by it.
    pub job_type: String,
    pub remote: bool,
    pub max_jobs: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest {
            keywords: String::new(),
            location: "Morocco".to_string(),
            experience: String::new(),
            job_type: String::new(),
            remote: false,
            max_jobs: 25,
        }
    }
}

impl SearchRequest {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            keywords: self.keywords.clone(),
            location: self.location.clone(),
            remote_only: self.remote,
            experience_level: self.experience.clone(),
            max_results: self.max_jobs,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub count: usize,
    pub jobs: Vec<JobPosting>,
    pub search_params: SearchRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
