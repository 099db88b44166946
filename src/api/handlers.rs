use axum::{Json, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::data_models::now_iso8601;
use crate::job_scraper::ScrapeOutcome;
use crate::mock;

use super::AppState;
use super::models::{HealthResponse, SearchRequest, SearchResponse};

pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the LinkedIn Jobs Finder API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/search": "Scrape live LinkedIn job postings",
            "POST /api/mock-search": "Return sample job postings",
            "GET /api/health": "Check that the API is up"
        }
    }))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: now_iso8601(),
    })
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let outcome = state.scraper.search(&request.filters()).await;

    let response = match outcome {
        ScrapeOutcome::Found(jobs) => SearchResponse {
            success: true,
            count: jobs.len(),
            jobs,
            search_params: request,
            error: None,
            note: None,
        },
        ScrapeOutcome::Failed(reason) => {
            tracing::warn!(%reason, "search answered without results");
            SearchResponse {
                success: false,
                count: 0,
                jobs: vec![],
                search_params: request,
                error: Some(reason),
                note: None,
            }
        }
    };
    Json(response)
}

pub async fn mock_search_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let jobs = mock::search(&request.keywords);

    tokio::time::sleep(state.mock_delay).await;

    Json(SearchResponse {
        success: true,
        count: jobs.len(),
        jobs,
        search_params: request,
        error: None,
        note: Some(mock::MOCK_NOTE.to_string()),
    })
}
