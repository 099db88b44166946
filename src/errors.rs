use thiserror::Error;

/// Failure of the single outbound request for a search page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Marker configuration that cannot be turned into CSS selectors.
#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("invalid selector {selector:?} for {field}: {reason}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        reason: String,
    },
}
