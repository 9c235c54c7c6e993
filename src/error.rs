//! Unified error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Classify a transport error, pulling timeouts out of the reqwest error.
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::Reqwest(e)
        }
    }

    /// Whether the upstream answered with a non-200 status.
    pub fn is_status(&self) -> bool {
        matches!(
            self,
            HttpError::UnexpectedStatus { .. }
                | HttpError::RateLimited { .. }
                | HttpError::NotFound(_)
                | HttpError::BadRequest(_)
        )
    }
}

/// Reasons a spot quote degrades to a sentinel.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Symbol not supported: {0}")]
    UnsupportedSymbol(String),

    #[error("API error: {0}")]
    Api(HttpError),

    #[error("Price not available")]
    PriceNotAvailable,

    #[error("Request timeout")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

impl QuoteError {
    /// The fixed display token shown in place of a price.
    pub fn sentinel(&self) -> &'static str {
        match self {
            QuoteError::UnsupportedSymbol(_) => "Symbol not supported",
            QuoteError::Api(_) => "API Error",
            QuoteError::PriceNotAvailable => "Price not available",
            QuoteError::Timeout => "Request timeout",
            QuoteError::Other(_) => "Error",
        }
    }
}

impl From<HttpError> for QuoteError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Timeout => QuoteError::Timeout,
            e if e.is_status() => QuoteError::Api(e),
            e => QuoteError::Other(e.to_string()),
        }
    }
}

/// Historical series failures. Both variants are non-fatal.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("No data found for {symbol}")]
    NoData { symbol: String },

    #[error("Error fetching data: {0}")]
    Fetch(String),
}
