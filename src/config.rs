use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::extractor::MarkerSet;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        host: get_env_or_default("HOST", "0.0.0.0"),
        port: get_parsed_or_default("PORT", 8000),
        base_url: get_env_or_default("JOBS_BASE_URL", DEFAULT_BASE_URL),
        user_agent: get_env_or_default("JOBS_USER_AGENT", DEFAULT_USER_AGENT),
        accept_language: get_env_or_default("JOBS_ACCEPT_LANGUAGE", DEFAULT_ACCEPT_LANGUAGE),
        timeout_secs: get_positive_or_default("JOBS_TIMEOUT_SECS", 10),
        mock_delay_ms: get_parsed_or_default("MOCK_DELAY_MS", 500),
        markers_file: env::var("MARKERS_FILE").ok().map(PathBuf::from),
    }
});

pub const DEFAULT_BASE_URL: &str = "https://www.linkedin.com/jobs/search";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "fr-FR,fr;q=0.9,en;q=0.8";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout_secs: u64,
    pub mock_delay_ms: u64,
    pub markers_file: Option<PathBuf>,
}

impl Config {
    /// Settings handed to the page fetcher. Built once at startup.
    pub fn scraper_config(&self) -> ScraperConfig {
        ScraperConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            accept_language: self.accept_language.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Marker set from `MARKERS_FILE`, or the built-in one.
    pub fn markers(&self) -> Result<MarkerSet> {
        let Some(path) = &self.markers_file else {
            return Ok(MarkerSet::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markers file {}", path.display()))?;
        let markers = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid markers file {}", path.display()))?;
        Ok(markers)
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }
}

/// Immutable settings for outbound requests: where to search and how to look like a browser.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_parsed_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_or_default(key, &raw, default),
        Err(_) => default,
    }
}

/// Like `get_parsed_or_default`, but zero is rejected as well.
fn get_positive_or_default(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => positive_or_default(key, &raw, default),
        Err(_) => default,
    }
}

fn positive_or_default(key: &str, raw: &str, default: u64) -> u64 {
    match parse_or_default(key, raw, default) {
        0 => {
            log::warn!("{key} must be greater than zero, using {default}");
            default
        }
        value => value,
    }
}

fn parse_or_default<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    raw.trim().parse().unwrap_or_else(|_| {
        log::warn!("invalid value {raw:?} for {key}, using {default}");
        default
    })
}
