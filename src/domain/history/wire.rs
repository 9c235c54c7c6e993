//! Wire types for the chart endpoint.
//!
//! Columns the dashboard never shows (adjusted close, dividend and split
//! events, most of `meta`) are left out and dropped by serde.

use serde::Deserialize;

/// `GET /v8/finance/chart/{symbol}` response.
#[derive(Deserialize, Debug, Clone)]
pub struct ChartResponse {
    pub chart: ChartBody,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChartBody {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ChartMeta {
    /// Exchange offset from UTC, in seconds.
    #[serde(default)]
    pub gmtoffset: Option<i64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

/// Column-oriented OHLCV. Upstream emits `null` for missing cells.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}
