//! Display-ready rendering of a series for the data table.

use super::OhlcvRecord;
use crate::shared::{display_with_decimals, usd};
use serde::{Deserialize, Serialize};

/// One pre-formatted table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub time: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

impl DisplayRow {
    /// Table header, in column order.
    pub const COLUMNS: [&'static str; 6] = ["time", "open", "high", "low", "close", "volume"];

    pub fn cells(&self) -> [&str; 6] {
        [
            self.time.as_str(),
            self.open.as_str(),
            self.high.as_str(),
            self.low.as_str(),
            self.close.as_str(),
            self.volume.as_str(),
        ]
    }
}

impl From<&OhlcvRecord> for DisplayRow {
    fn from(r: &OhlcvRecord) -> Self {
        Self {
            time: r.time.format("%Y-%m-%d").to_string(),
            open: usd(r.open),
            high: usd(r.high),
            low: usd(r.low),
            close: usd(r.close),
            volume: display_with_decimals(r.volume, 0),
        }
    }
}

/// Format every record, preserving order. The input is only borrowed.
pub fn format_series(records: &[OhlcvRecord]) -> Vec<DisplayRow> {
    records.iter().map(DisplayRow::from).collect()
}
