//! Spot price fetches against a local stub of the quotation API.

mod common;

use std::time::Duration;

use common::{closed_url, MockServer, Reply};
use crypto_dashboard::prelude::*;

const BTC_BODY: &str = r#"{"Symbol":"BTC","Name":"Bitcoin","Price":1234.5,"Change24h":-2.1}"#;

fn client_for(url: &str) -> DashboardClient {
    DashboardClient::builder()
        .quote_base_url(url)
        .quote_timeout(Duration::from_millis(300))
        .build()
        .unwrap()
}

fn assert_sentinel(quote: &Quote, sentinel: &str) {
    assert_eq!(quote.display_price, sentinel);
    assert_eq!(quote.change_percent, 0.0);
}

#[tokio::test]
async fn formats_price_and_change() {
    let server = MockServer::start(Reply::ok(BTC_BODY)).await;
    let client = client_for(&server.url());

    let quote = client.quotes().fetch_price("BTC/USDT").await;

    assert_eq!(quote.display_price, "$1,234.50");
    assert_eq!(quote.change_percent, -2.1);
    assert_eq!(
        server.paths(),
        vec!["/v1/assetQuotation/Bitcoin/0x0000000000000000000000000000000000000000"]
    );
}

#[tokio::test]
async fn xrp_uses_blockchain_override() {
    let server = MockServer::start(Reply::ok(r#"{"Price":0.6234}"#)).await;
    let client = client_for(&server.url());

    let quote = client.quotes().fetch_price("XRP/USDT").await;

    assert_eq!(quote.display_price, "$0.62");
    assert_eq!(quote.change_percent, 0.0);
    assert_eq!(
        server.paths(),
        vec!["/v1/assetQuotation/XRPL/0x0000000000000000000000000000000000000000"]
    );
}

#[tokio::test]
async fn unsupported_symbol_makes_no_request() {
    let server = MockServer::start(Reply::ok(BTC_BODY)).await;
    let client = client_for(&server.url());

    for symbol in ["DOGE/USDT", "ADA/USDT", "BTC-USD", "btc/USDT", ""] {
        let quote = client.quotes().fetch_price(symbol).await;
        assert_sentinel(&quote, "Symbol not supported");
    }
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn non_200_is_api_error() {
    for status in [201, 302, 404, 429, 500, 503] {
        let server = MockServer::start(Reply::Status(status, BTC_BODY.to_string())).await;
        let client = client_for(&server.url());

        let quote = client.quotes().fetch_price("ETH/USDT").await;

        assert_sentinel(&quote, "API Error");
        assert_eq!(server.hits(), 1, "status {status} must not be retried");
    }
}

#[tokio::test]
async fn redirect_is_api_error_and_not_followed() {
    let server = MockServer::sequence(vec![
        Reply::WithHeaders(302, vec![("location", "/elsewhere".to_string())], String::new()),
        Reply::ok(BTC_BODY),
    ])
    .await;
    let client = client_for(&server.url());

    let quote = client.quotes().fetch_price("BTC/USDT").await;

    assert_sentinel(&quote, "API Error");
    assert_eq!(server.hits(), 1);
    assert_eq!(
        server.paths(),
        vec!["/v1/assetQuotation/Bitcoin/0x0000000000000000000000000000000000000000"]
    );
}

#[tokio::test]
async fn odd_metadata_does_not_block_price() {
    let server = MockServer::start(Reply::ok(r#"{"Symbol":5,"Name":null,"Price":1}"#)).await;
    let client = client_for(&server.url());

    let quote = client.quotes().fetch_price("BTC/USDT").await;

    assert_eq!(quote.display_price, "$1.00");
    assert_eq!(quote.change_percent, 0.0);
}

#[tokio::test]
async fn missing_price_is_not_available() {
    for body in [r#"{"Change24h":1.5}"#, r#"{"Price":null,"Change24h":1.5}"#] {
        let server = MockServer::start(Reply::ok(body)).await;
        let client = client_for(&server.url());

        let quote = client.quotes().fetch_price("SOL/USDT").await;

        assert_sentinel(&quote, "Price not available");
    }
}

#[tokio::test]
async fn null_change_defaults_to_zero() {
    let server = MockServer::start(Reply::ok(r#"{"Price":150.0,"Change24h":null}"#)).await;
    let client = client_for(&server.url());

    let quote = client.quotes().fetch_price("SOL/USDT").await;

    assert_eq!(quote.display_price, "$150.00");
    assert_eq!(quote.change_percent, 0.0);
    assert!(quote.is_up());
}

#[tokio::test]
async fn stalled_upstream_is_request_timeout() {
    let server = MockServer::start(Reply::Stall).await;
    let client = client_for(&server.url());

    let quote = client.quotes().fetch_price("XMR/USDT").await;

    assert_sentinel(&quote, "Request timeout");
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn malformed_body_is_generic_error() {
    for body in ["not json", r#"{"Price":"abc"}"#, "[]"] {
        let server = MockServer::start(Reply::ok(body)).await;
        let client = client_for(&server.url());

        let quote = client.quotes().fetch_price("BTC/USDT").await;

        assert_sentinel(&quote, "Error");
    }
}

#[tokio::test]
async fn connection_refused_is_generic_error() {
    let client = client_for(&closed_url().await);

    let quote = client.quotes().fetch_price("BTC/USDT").await;

    assert_sentinel(&quote, "Error");
}

#[tokio::test]
async fn try_fetch_price_keeps_typed_error() {
    let server = MockServer::start(Reply::Status(502, String::new())).await;
    let client = client_for(&server.url());

    let err = client
        .quotes()
        .try_fetch_price("BTC/USDT")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        QuoteError::Api(HttpError::UnexpectedStatus { status: 502, .. })
    ));
}

#[tokio::test]
async fn fetch_all_returns_cards_in_order() {
    let server = MockServer::start(Reply::ok(BTC_BODY)).await;
    let client = client_for(&server.url());

    let cards = client.quotes().fetch_all().await;

    let pairs: Vec<&str> = cards.iter().map(|c| c.pair.as_str()).collect();
    assert_eq!(pairs, TRACKED_PAIRS);
    assert!(cards.iter().all(|c| c.quote.display_price == "$1,234.50"));
    assert!(cards.iter().all(|c| c.arrow() == "▼"));
    assert_eq!(server.hits(), TRACKED_PAIRS.len());
}
