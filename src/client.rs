//! High-level client — `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::history::client::History;
use crate::domain::quote::client::Quotes;
use crate::error::DashboardError;
use crate::http::{DashboardHttp, HttpConfig, RetryPolicy};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::history::client::History as HistorySubClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;

/// The primary entry point.
///
/// Provides nested sub-client accessors: `client.quotes()`, `client.history()`.
/// Holds no mutable state; cloning is cheap and shares the connection pool.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) http: DashboardHttp,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn http(&self) -> &DashboardHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct DashboardClientBuilder {
    config: HttpConfig,
}

impl DashboardClientBuilder {
    pub fn quote_base_url(mut self, url: &str) -> Self {
        self.config.quote_base_url = url.to_string();
        self
    }

    pub fn history_base_url(mut self, url: &str) -> Self {
        self.config.history_base_url = url.to_string();
        self
    }

    /// Timeout for a single quotation request. Defaults to 10 seconds.
    pub fn quote_timeout(mut self, timeout: Duration) -> Self {
        self.config.quote_timeout = timeout;
        self
    }

    /// Client-wide timeout, used by history requests. Defaults to 30 seconds.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: &str) -> Self {
        self.config.user_agent = agent.to_string();
        self
    }

    pub fn history_retry(mut self, policy: RetryPolicy) -> Self {
        self.config.history_retry = policy;
        self
    }

    pub fn build(self) -> Result<DashboardClient, DashboardError> {
        if self.config.quote_timeout.is_zero() {
            return Err(DashboardError::Validation(
                "quote timeout must be non-zero".to_string(),
            ));
        }
        Ok(DashboardClient {
            http: DashboardHttp::new(self.config)?,
        })
    }
}
