//! Pending-call aggregation order
//!
//! Two pending calls are issued before either is awaited; the stubbed
//! node answers the second one first. The aggregated output must still
//! follow issue order.

use ethrpc_client::{join_all, AsyncClient};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SLOW_ADDRESS: &str = "0x407d73d8a49eeb85d32cf465507dd71d507100c1";
const FAST_ADDRESS: &str = "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae";

#[tokio::test]
async fn test_join_all_preserves_issue_order() {
    let server = MockServer::start().await;

    // The first issued call answers late, the second immediately.
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "method": "eth_getBalance",
            "params": [SLOW_ADDRESS, "latest"],
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"jsonrpc": "2.0", "result": "0x1", "id": 1}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "method": "eth_getBalance",
            "params": [FAST_ADDRESS, "latest"],
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"jsonrpc": "2.0", "result": "0x2", "id": 1})),
        )
        .mount(&server)
        .await;

    let client = AsyncClient::new(server.uri()).unwrap();
    let pending = [SLOW_ADDRESS, FAST_ADDRESS]
        .iter()
        .map(|a| client.eth_get_balance(a, None));

    let mut results = Vec::new();
    for response in join_all(pending).await {
        let body: serde_json::Value = response.unwrap().json().await.unwrap();
        results.push(body["result"].as_str().unwrap().to_string());
    }

    assert_eq!(results, vec!["0x1", "0x2"]);
}

#[tokio::test]
async fn test_pending_calls_overlap() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"jsonrpc": "2.0", "result": "0x0", "id": 1}))
                .set_delay(Duration::from_millis(250)),
        )
        .mount(&server)
        .await;

    let client = AsyncClient::new(server.uri()).unwrap();
    let addresses = [SLOW_ADDRESS, FAST_ADDRESS, SLOW_ADDRESS, FAST_ADDRESS];
    let pending = addresses.iter().map(|a| client.eth_get_balance(a, None));

    let started = std::time::Instant::now();
    let responses = join_all(pending).await;
    let elapsed = started.elapsed();

    assert_eq!(responses.len(), 4);
    for response in responses {
        assert!(response.unwrap().status().is_success());
    }
    // Four serialized 250ms round trips would take a second; overlap
    // keeps the batch close to a single delay.
    assert!(elapsed < Duration::from_millis(900), "elapsed {elapsed:?}");
}
