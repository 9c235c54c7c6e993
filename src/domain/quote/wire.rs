//! Wire types for the asset quotation endpoint.

use serde::{Deserialize, Serialize};

/// `GET /v1/assetQuotation/{blockchain}/{address}` response.
///
/// Only the fields the dashboard reads are modelled; everything else in the
/// body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetQuotationResponse {
    #[serde(rename = "Price", default)]
    pub price: Option<f64>,
    #[serde(rename = "Change24h", default)]
    pub change_24h: Option<f64>,
}
