//! # crypto-dashboard
//!
//! Data layer for a crypto price dashboard: spot quotes for a fixed set of
//! assets and daily OHLCV series reshaped for charting and tabular display.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared formatting, domain models, the static symbol map
//! 2. **HTTP API** — `DashboardHttp` with one method per upstream endpoint
//! 3. **High-Level Client** — `DashboardClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crypto_dashboard::prelude::*;
//!
//! let client = DashboardClient::builder().build()?;
//!
//! let quote = client.quotes().fetch_price("BTC/USDT").await;
//! let series = client.history().fetch_history("BTC-USD", DEFAULT_PERIOD).await?;
//! let table = format_series(series.records());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Upstream URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — quotes
    pub use crate::domain::quote::symbols::{AssetMapping, SYMBOL_MAP, TRACKED_PAIRS};
    pub use crate::domain::quote::{PriceCard, Quote};

    // Domain types — history
    pub use crate::domain::history::display::{format_series, DisplayRow};
    pub use crate::domain::history::{
        OhlcvRecord, Series, DEFAULT_HISTORY_SYMBOL, DEFAULT_PERIOD, HISTORY_SYMBOLS,
        VALID_PERIODS,
    };

    // Errors
    pub use crate::error::{DashboardError, HistoryError, HttpError, QuoteError};

    // Network
    pub use crate::network::{DEFAULT_HISTORY_URL, DEFAULT_QUOTE_URL};

    // HTTP client + sub-clients
    pub use crate::client::{
        DashboardClient, DashboardClientBuilder, HistorySubClient, QuotesClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
