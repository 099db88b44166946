#![allow(dead_code)]

use axum::{
    Router,
    extract::RawQuery,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use std::net::SocketAddr;
use std::time::Duration;

use jobfinder::config::ScraperConfig;
use jobfinder::data_models::SearchFilters;

pub const SEARCH_PAGE: &str = include_str!("../fixtures/search_page.html");

/// Serves canned pages on a random local port and returns its address.
///
/// - `/jobs/search`: three listing cards
/// - `/echo/search`: one card describing the request it received
/// - `/broken/search`: 500
/// - `/slow/search`: answers after two seconds
pub async fn spawn_fixture_server() -> SocketAddr {
    let app = Router::new()
        .route("/jobs/search", get(|| async { SEARCH_PAGE }))
        .route("/echo/search", get(echo_request))
        .route(
            "/broken/search",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route(
            "/slow/search",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                SEARCH_PAGE
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn echo_request(headers: HeaderMap, RawQuery(query): RawQuery) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    format!(
        r#"<div class="base-card">
            <h3 class="base-search-card__title">{}</h3>
            <h4 class="base-search-card__subtitle">{}</h4>
            <span class="job-search-card__location">{}</span>
        </div>"#,
        header("user-agent"),
        header("accept-language"),
        query.unwrap_or_default()
    )
}

pub fn scraper_config(addr: SocketAddr, path: &str) -> ScraperConfig {
    ScraperConfig {
        base_url: format!("http://{addr}{path}"),
        ..ScraperConfig::default()
    }
}

pub fn filters(keywords: &str, max_results: usize) -> SearchFilters {
    SearchFilters {
        keywords: keywords.to_string(),
        location: "Morocco".to_string(),
        remote_only: false,
        experience_level: String::new(),
        max_results,
    }
}
