//! Quotes sub-client — spot price lookups.

use super::symbols::{self, TRACKED_PAIRS};
use super::{PriceCard, Quote};
use crate::client::DashboardClient;
use crate::error::QuoteError;

pub struct Quotes<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Quotes<'a> {
    /// Fetch the spot price for a `BASE/QUOTE` pair.
    ///
    /// Never fails: every error degrades to a sentinel quote.
    pub async fn fetch_price(&self, symbol: &str) -> Quote {
        match self.try_fetch_price(symbol).await {
            Ok(quote) => quote,
            Err(e) => {
                tracing::warn!(symbol, error = %e, "Quote degraded to \"{}\"", e.sentinel());
                Quote::degraded(&e)
            }
        }
    }

    /// Same as [`fetch_price`](Self::fetch_price) but keeps the typed error.
    pub async fn try_fetch_price(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let mapping = symbols::resolve(symbol).ok_or_else(|| {
            QuoteError::UnsupportedSymbol(symbols::asset_code(symbol).to_string())
        })?;

        let resp = self
            .client
            .http
            .get_asset_quotation(mapping.blockchain(), mapping.address)
            .await?;

        Quote::try_from(resp)
    }

    /// Quotes for every tracked pair, in card order.
    pub async fn fetch_all(&self) -> Vec<PriceCard> {
        let mut cards = Vec::with_capacity(TRACKED_PAIRS.len());
        for pair in TRACKED_PAIRS {
            cards.push(PriceCard {
                pair: pair.to_string(),
                quote: self.fetch_price(pair).await,
            });
        }
        cards
    }
}
