//! Static symbol map: short asset code → quotation API parameters.

use std::collections::HashMap;

/// Placeholder address the quotation API accepts for native assets.
pub const NATIVE_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Pairs shown as price cards, in display order.
pub const TRACKED_PAIRS: [&str; 5] = ["BTC/USDT", "ETH/USDT", "XMR/USDT", "SOL/USDT", "XRP/USDT"];

/// Quotation API parameters for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetMapping {
    /// Provider asset name, doubling as the blockchain path segment.
    pub name: &'static str,
    pub address: &'static str,
    /// Blockchain path segment when it differs from `name`.
    pub blockchain: Option<&'static str>,
}

impl AssetMapping {
    const fn native(name: &'static str) -> Self {
        Self {
            name,
            address: NATIVE_ADDRESS,
            blockchain: None,
        }
    }

    /// Blockchain segment of the request path.
    pub fn blockchain(&self) -> &'static str {
        self.blockchain.unwrap_or(self.name)
    }
}

lazy_static::lazy_static! {
    /// Asset code → quotation parameters. Never mutated.
    pub static ref SYMBOL_MAP: HashMap<&'static str, AssetMapping> = HashMap::from([
        ("BTC", AssetMapping::native("Bitcoin")),
        ("ETH", AssetMapping::native("Ethereum")),
        ("XMR", AssetMapping::native("Monero")),
        ("SOL", AssetMapping::native("Solana")),
        (
            "XRP",
            AssetMapping {
                blockchain: Some("XRPL"),
                ..AssetMapping::native("XRP")
            },
        ),
    ]);
}

/// Asset code of a `BASE/QUOTE` pair: everything before the first `/`.
pub fn asset_code(pair: &str) -> &str {
    pair.split('/').next().unwrap_or(pair)
}

/// Look up the quotation parameters for a `BASE/QUOTE` pair.
pub fn resolve(pair: &str) -> Option<&'static AssetMapping> {
    SYMBOL_MAP.get(asset_code(pair))
}
