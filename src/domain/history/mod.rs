//! History domain — daily OHLCV series in the canonical charting shape.

pub mod client;
mod convert;
pub mod display;
pub mod wire;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ticker loaded on first render.
pub const DEFAULT_HISTORY_SYMBOL: &str = "BTC-USD";

/// Default lookback.
pub const DEFAULT_PERIOD: &str = "1y";

/// Tickers offered by the symbol picker.
pub const HISTORY_SYMBOLS: [&str; 10] = [
    "BTC-USD", "ETH-USD", "XMR-USD", "SOL-USD", "XRP-USD", "ADA-USD", "DOGE-USD", "LTC-USD",
    "AVAX-USD", "MATIC-USD",
];

/// Lookback tokens the provider recognizes.
pub const VALID_PERIODS: [&str; 11] = [
    "1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max",
];

/// One daily candle. Field names and order are what the chart widget expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcvRecord {
    pub time: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Chronologically ascending candles for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    symbol: String,
    records: Vec<OhlcvRecord>,
}

impl Series {
    pub fn new(symbol: impl Into<String>, records: Vec<OhlcvRecord>) -> Self {
        Self {
            symbol: symbol.into(),
            records,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn records(&self) -> &[OhlcvRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<OhlcvRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&OhlcvRecord> {
        self.records.last()
    }

    /// Keep only the newest `n` candles.
    pub fn tail(mut self, n: usize) -> Self {
        let skip = self.records.len().saturating_sub(n);
        self.records.drain(..skip);
        self
    }

    /// The records as a JSON array for a charting widget.
    pub fn to_chart_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }
}
