use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::ScraperConfig;
use crate::errors::FetchError;

/// Downloads search pages with browser-like headers.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &ScraperConfig) -> anyhow::Result<PageFetcher> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&config.accept_language)?);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(PageFetcher { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = res.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        log::debug!("fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
