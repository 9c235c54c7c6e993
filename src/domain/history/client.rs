//! History sub-client — daily OHLCV queries.

use super::convert::series_from_chart;
use super::Series;
use crate::client::DashboardClient;
use crate::error::{HistoryError, HttpError};

pub struct History<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> History<'a> {
    /// Fetch the daily series for `symbol` (e.g. `"BTC-USD"`) over `period`
    /// (e.g. `"1y"`).
    pub async fn fetch_history(&self, symbol: &str, period: &str) -> Result<Series, HistoryError> {
        let resp = match self.client.http.get_chart(symbol, period).await {
            Ok(resp) => resp,
            Err(HttpError::NotFound(_)) => {
                return Err(HistoryError::NoData {
                    symbol: symbol.to_string(),
                })
            }
            Err(e) => return Err(HistoryError::Fetch(e.to_string())),
        };

        let series = series_from_chart(symbol, resp);
        match &series {
            Ok(s) => tracing::debug!(symbol, period, candles = s.len(), "Loaded history"),
            Err(e) => tracing::warn!(symbol, period, error = %e, "History unavailable"),
        }
        series
    }
}
