//! Quote domain — spot prices for the tracked assets.

pub mod client;
pub mod symbols;
pub mod wire;

use crate::error::QuoteError;
use crate::shared::usd;
use serde::{Deserialize, Serialize};

/// Result of a price fetch.
///
/// `display_price` is either a formatted dollar amount or one of the fixed
/// sentinel tokens from [`QuoteError::sentinel`]. `change_percent` is `0` on
/// every error path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub display_price: String,
    pub change_percent: f64,
}

impl Quote {
    pub fn new(price: f64, change_percent: f64) -> Self {
        Self {
            display_price: usd(price),
            change_percent,
        }
    }

    /// The placeholder quote shown when a fetch fails.
    pub fn degraded(error: &QuoteError) -> Self {
        Self {
            display_price: error.sentinel().to_string(),
            change_percent: 0.0,
        }
    }

    /// Only the sign of the change is surfaced to the presentation layer.
    pub fn is_up(&self) -> bool {
        self.change_percent >= 0.0
    }
}

impl TryFrom<wire::AssetQuotationResponse> for Quote {
    type Error = QuoteError;

    fn try_from(resp: wire::AssetQuotationResponse) -> Result<Self, Self::Error> {
        let price = resp.price.ok_or(QuoteError::PriceNotAvailable)?;
        Ok(Quote::new(price, resp.change_24h.unwrap_or(0.0)))
    }
}

/// One card of the price strip: a tracked pair and its latest quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCard {
    pub pair: String,
    pub quote: Quote,
}

impl PriceCard {
    /// `"BTC/USDT"` → `"BTC / USDT"`.
    pub fn label(&self) -> String {
        self.pair.replace('/', " / ")
    }

    pub fn arrow(&self) -> &'static str {
        if self.quote.is_up() {
            "▲"
        } else {
            "▼"
        }
    }
}

impl std::fmt::Display for PriceCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  {} {}",
            self.label(),
            self.quote.display_price,
            self.arrow()
        )
    }
}
