//! Upstream URL constants.

/// Default base URL of the DIA asset quotation API.
pub const DEFAULT_QUOTE_URL: &str = "https://api.diadata.org";

/// Default base URL of the Yahoo Finance chart API.
pub const DEFAULT_HISTORY_URL: &str = "https://query1.finance.yahoo.com";

/// User agent sent with every request. The chart API rate-limits agents
/// that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) crypto-dashboard/",
    env!("CARGO_PKG_VERSION")
);
