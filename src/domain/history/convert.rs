//! Conversion from the column-oriented chart response to a canonical series.

use super::wire::{ChartResponse, ChartResult};
use super::{OhlcvRecord, Series};
use crate::error::HistoryError;
use chrono::{DateTime, NaiveDate};

const NOT_FOUND: &str = "Not Found";

/// Reshape a chart response into a [`Series`].
///
/// Rows missing any of open/high/low/close are skipped; a missing volume
/// reads as zero.
pub(crate) fn series_from_chart(symbol: &str, resp: ChartResponse) -> Result<Series, HistoryError> {
    let no_data = || HistoryError::NoData {
        symbol: symbol.to_string(),
    };

    if let Some(err) = resp.chart.error {
        if err.code == NOT_FOUND {
            return Err(no_data());
        }
        return Err(HistoryError::Fetch(format!("{}: {}", err.code, err.description)));
    }

    let result = resp
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(no_data)?;

    let records = records_from_result(result)?;
    if records.is_empty() {
        return Err(no_data());
    }

    Ok(Series::new(symbol, records))
}

fn records_from_result(result: ChartResult) -> Result<Vec<OhlcvRecord>, HistoryError> {
    let timestamps = result.timestamp.unwrap_or_default();
    let Some(columns) = result.indicators.quote.into_iter().next() else {
        return Ok(Vec::new());
    };
    let offset = result.meta.gmtoffset.unwrap_or(0);

    let mut records = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.into_iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            cell(&columns.open, i),
            cell(&columns.high, i),
            cell(&columns.low, i),
            cell(&columns.close, i),
        ) else {
            tracing::debug!(timestamp = ts, "Skipping incomplete candle");
            continue;
        };

        records.push(OhlcvRecord {
            time: trading_date(ts, offset)?,
            open,
            high,
            low,
            close,
            volume: cell(&columns.volume, i).unwrap_or(0.0),
        });
    }

    Ok(records)
}

fn cell(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

/// Calendar date of a Unix timestamp in the exchange's local time.
fn trading_date(timestamp: i64, gmtoffset: i64) -> Result<NaiveDate, HistoryError> {
    timestamp
        .checked_add(gmtoffset)
        .and_then(|local| DateTime::from_timestamp(local, 0))
        .map(|dt| dt.date_naive())
        .ok_or_else(|| HistoryError::Fetch(format!("timestamp out of range: {}", timestamp)))
}
