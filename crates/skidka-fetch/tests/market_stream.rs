//! Integration tests for the market pagination driver.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy path (several pages then an
//! empty one), every terminal condition, the discount filter, and the
//! early-exit laziness guarantee.

use futures::{StreamExt, pin_mut};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skidka_fetch::{MarketQuery, MarketSource, PageClient, flatten_records, page_stream};

/// Builds a sell-orders page payload with one item per (name, discount) pair.
fn market_page(items: &[(&str, f64)]) -> serde_json::Value {
    json!({
        "items": items
            .iter()
            .map(|(name, discount)| {
                json!({
                    "asset": {
                        "names": { "full": name },
                        "float": 0.1,
                        "pattern": 7
                    },
                    "pricing": {
                        "discount": discount,
                        "default": 100.0,
                        "priceBeforeDiscount": 90.0,
                        "computed": 100.0 * (1.0 - discount)
                    }
                })
            })
            .collect::<Vec<_>>()
    })
}

fn empty_page() -> serde_json::Value {
    json!({ "items": [] })
}

fn test_source(server: &MockServer, limit: u32, min_discount: f64) -> MarketSource {
    MarketSource::new(MarketQuery {
        limit,
        min_discount,
        ..Default::default()
    })
    .with_base_url(server.uri())
}

#[tokio::test]
async fn two_pages_then_empty_page_terminates_after_three_fetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(market_page(&[("first", 0.5), ("second", 0.4)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(market_page(&[("third", 0.3), ("fourth", 0.2)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(&server)
        .await;

    let client = PageClient::with_defaults().expect("client");
    let source = test_source(&server, 2, 0.0);

    let records = flatten_records(page_stream(&client, &source));
    pin_mut!(records);
    let mut names = Vec::new();
    while let Some(item) = records.next().await {
        names.push(item.name);
    }

    assert_eq!(names, ["first", "second", "third", "fourth"]);
    assert_eq!(
        server.received_requests().await.expect("requests").len(),
        3,
        "expected exactly k + 1 fetches for k non-empty pages"
    );
}

#[tokio::test]
async fn early_exit_fetches_only_the_pages_it_needs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(market_page(&[("a", 0.5), ("b", 0.5)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(market_page(&[("c", 0.5), ("d", 0.5)])))
        .mount(&server)
        .await;
    // Further pages exist; a lazy consumer must never reach them.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(market_page(&[("e", 0.5), ("f", 0.5)])))
        .mount(&server)
        .await;

    let client = PageClient::with_defaults().expect("client");
    let source = test_source(&server, 2, 0.0);

    let records = flatten_records(page_stream(&client, &source)).take(3);
    pin_mut!(records);
    let mut count = 0;
    while let Some(_item) = records.next().await {
        count += 1;
    }

    assert_eq!(count, 3);
    assert_eq!(
        server.received_requests().await.expect("requests").len(),
        2,
        "three records span two pages; no further fetch should happen"
    );
}

#[tokio::test]
async fn error_status_ends_the_run_and_keeps_prior_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(market_page(&[("kept", 0.5)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = PageClient::with_defaults().expect("client");
    let source = test_source(&server, 2, 0.0);

    let records = flatten_records(page_stream(&client, &source));
    pin_mut!(records);
    let mut names = Vec::new();
    while let Some(item) = records.next().await {
        names.push(item.name);
    }

    assert_eq!(names, ["kept"]);
}

#[tokio::test]
async fn malformed_body_ends_the_run_and_keeps_prior_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(market_page(&[("kept", 0.5)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let client = PageClient::with_defaults().expect("client");
    let source = test_source(&server, 2, 0.0);

    let records = flatten_records(page_stream(&client, &source));
    pin_mut!(records);
    let mut names = Vec::new();
    while let Some(item) = records.next().await {
        names.push(item.name);
    }

    assert_eq!(names, ["kept"]);
}

#[tokio::test]
async fn yielded_records_all_satisfy_the_discount_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(market_page(&[
            ("deep", 0.5),
            ("shallow", 0.1),
            ("exact", 0.3),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("offset", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(&server)
        .await;

    let client = PageClient::with_defaults().expect("client");
    // Threshold passed as a percentage; the source normalizes it to 0.3.
    let source = test_source(&server, 3, 30.0);

    let records = flatten_records(page_stream(&client, &source));
    pin_mut!(records);
    let mut items = Vec::new();
    while let Some(item) = records.next().await {
        items.push(item);
    }

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.discount >= 0.3));
    assert_eq!(items[0].name, "deep");
    assert_eq!(items[1].name, "exact");
}
