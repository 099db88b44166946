use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use crate::job_scraper::JobScraper;

pub mod handlers;
pub mod models;

/// Shared, read-only state of the API.
pub struct AppState {
    pub scraper: JobScraper,
    pub mock_delay: Duration,
}

impl AppState {
    pub fn new(scraper: JobScraper, mock_delay: Duration) -> AppState {
        AppState {
            scraper,
            mock_delay,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home_handler))
        .route("/api/health", get(handlers::health_handler))
        .route("/api/search", post(handlers::search_handler))
        .route("/api/mock-search", post(handlers::mock_search_handler))
        .with_state(state)
        .layer(cors)
}
