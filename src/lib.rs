pub mod api;
pub mod config;
pub mod data_models;
pub mod errors;
pub mod extractor;
pub mod fetcher;
pub mod job_scraper;
pub mod mock;
pub mod search_url;
