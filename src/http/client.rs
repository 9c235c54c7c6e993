//! Low-level HTTP client — `DashboardHttp`.
//!
//! One method per upstream endpoint. Returns wire types; conversion to domain
//! types happens in the sub-clients.

use crate::domain::history::wire::ChartResponse;
use crate::domain::quote::wire::AssetQuotationResponse;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::network::{DEFAULT_HISTORY_URL, DEFAULT_QUOTE_URL, DEFAULT_USER_AGENT};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Transport settings shared by every endpoint.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub quote_base_url: String,
    pub history_base_url: String,
    /// Hard limit on a single quotation request.
    pub quote_timeout: Duration,
    /// Client-wide timeout, inherited by the history endpoint.
    pub request_timeout: Duration,
    pub user_agent: String,
    pub history_retry: RetryPolicy,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            quote_base_url: DEFAULT_QUOTE_URL.to_string(),
            history_base_url: DEFAULT_HISTORY_URL.to_string(),
            quote_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            history_retry: RetryPolicy::Idempotent,
        }
    }
}

/// Low-level HTTP client for the quotation and chart APIs.
///
/// Redirects are not followed; a 3xx surfaces as an unexpected status.
#[derive(Clone)]
pub struct DashboardHttp {
    quote_base_url: String,
    history_base_url: String,
    quote_timeout: Duration,
    history_retry: RetryPolicy,
    client: Client,
}

impl DashboardHttp {
    pub fn new(config: HttpConfig) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .pool_max_idle_per_host(4)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            quote_base_url: config.quote_base_url.trim_end_matches('/').to_string(),
            history_base_url: config.history_base_url.trim_end_matches('/').to_string(),
            quote_timeout: config.quote_timeout,
            history_retry: config.history_retry,
            client,
        })
    }

    pub fn quote_base_url(&self) -> &str {
        &self.quote_base_url
    }

    pub fn history_base_url(&self) -> &str {
        &self.history_base_url
    }

    // ── Quotation ────────────────────────────────────────────────────────

    /// `GET /v1/assetQuotation/{blockchain}/{address}`. Never retried.
    pub async fn get_asset_quotation(
        &self,
        blockchain: &str,
        address: &str,
    ) -> Result<AssetQuotationResponse, HttpError> {
        let url = format!(
            "{}/v1/assetQuotation/{}/{}",
            self.quote_base_url,
            urlencoding::encode(blockchain),
            urlencoding::encode(address)
        );
        self.get(&url, Some(self.quote_timeout), &RetryPolicy::None)
            .await
    }

    // ── Chart ────────────────────────────────────────────────────────────

    /// `GET /v8/finance/chart/{symbol}` with a daily interval.
    pub async fn get_chart(&self, symbol: &str, range: &str) -> Result<ChartResponse, HttpError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d&events={}",
            self.history_base_url,
            urlencoding::encode(symbol),
            urlencoding::encode(range),
            urlencoding::encode("div,split")
        );
        self.get(&url, None, &self.history_retry).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        timeout: Option<Duration>,
        retry: &RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(url, timeout).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            let e = match self.do_request::<T>(url, timeout).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };
            if !config.should_retry(&e) {
                return Err(e);
            }

            if attempt < config.max_retries {
                let delay = match &e {
                    HttpError::RateLimited {
                        retry_after_ms: Some(ms),
                    } => Duration::from_millis(*ms).min(config.max_delay),
                    _ => config.delay_for_attempt(attempt),
                };
                tracing::debug!(
                    attempt = attempt + 1,
                    max = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Retrying request to {}",
                    url
                );
                futures_timer::Delay::new(delay).await;
            }
            last_error = Some(e);
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.get(url);
        if let Some(t) = timeout {
            req = req.timeout(t);
        }

        tracing::debug!("GET {}", url);
        let resp = req.send().await.map_err(HttpError::from_transport)?;
        let status = resp.status();

        if status == StatusCode::OK {
            return resp.json::<T>().await.map_err(HttpError::from_transport);
        }

        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs.saturating_mul(1000));
        let body_text = resp.text().await.unwrap_or_default();

        match status.as_u16() {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            status => Err(HttpError::UnexpectedStatus {
                status,
                body: body_text,
            }),
        }
    }
}
