//! WebSocket transport integration tests
//!
//! Exercises request/response correlation, id assignment, subscription
//! push routing, and pre-transport binding failures against the
//! in-process node stub.

mod common;

use common::{rpc_result, subscription_push, MockWsServer};
use ethrpc_client::WsClient;
use ethrpc_core::params::SubscriptionKind;
use ethrpc_core::{CallArgs, Error, Id};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

#[tokio::test]
async fn test_call_round_trip_and_monotonic_ids() {
    let server = MockWsServer::start(|request| {
        assert_eq!(request["jsonrpc"], "2.0");
        vec![rpc_result(&request["id"], json!("0x4b7"))]
    })
    .await;

    let client = WsClient::connect(&server.url()).await.unwrap();

    let first = client.call("eth_block_number", CallArgs::new()).await.unwrap();
    assert_eq!(first.result, Some(json!("0x4b7")));
    assert_eq!(first.id, Id::Number(0));

    let second = client.call("eth_blockNumber", CallArgs::new()).await.unwrap();
    assert_eq!(second.id, Id::Number(1));

    let third = client.call("net_version", CallArgs::new()).await.unwrap();
    assert_eq!(third.id, Id::Number(2));
}

#[tokio::test]
async fn test_out_of_order_responses_correlate_by_id() {
    // Hold the first request until the second arrives, then answer in
    // reverse order.
    let results = |method: &str| match method {
        "eth_blockNumber" => json!("0x4b7"),
        "eth_gasPrice" => json!("0x9184e72a000"),
        other => panic!("unexpected method {other}"),
    };
    let parked: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));

    let server = MockWsServer::start(move |request| {
        let mut parked = parked.lock().unwrap();
        parked.push(request);
        if parked.len() < 2 {
            return Vec::new();
        }
        let second = parked.pop().unwrap();
        let first = parked.pop().unwrap();
        vec![
            rpc_result(&second["id"], results(second["method"].as_str().unwrap())),
            rpc_result(&first["id"], results(first["method"].as_str().unwrap())),
        ]
    })
    .await;

    let client = WsClient::connect(&server.url()).await.unwrap();
    let (block_number, gas_price) = tokio::join!(
        client.call("eth_block_number", CallArgs::new()),
        client.call("eth_gas_price", CallArgs::new()),
    );

    // Each pending call received its own response even though the
    // completion order was reversed.
    assert_eq!(block_number.unwrap().result, Some(json!("0x4b7")));
    assert_eq!(gas_price.unwrap().result, Some(json!("0x9184e72a000")));
}

#[tokio::test]
async fn test_subscription_push_routing() {
    const SUB_ID: &str = "0x9cef478923ff08bf67fde6c64013158d";

    let server = MockWsServer::start(|request| match request["method"].as_str().unwrap() {
        "eth_subscribe" => {
            assert_eq!(request["params"], json!(["newHeads", {}]));
            vec![rpc_result(&request["id"], json!(SUB_ID))]
        }
        // The push rides ahead of this response on the same socket, so
        // the test can await it deterministically.
        "net_version" => vec![
            subscription_push("eth_subscription", SUB_ID, json!({"number": "0x77"})),
            rpc_result(&request["id"], json!("1")),
        ],
        "eth_unsubscribe" => {
            assert_eq!(request["params"], json!([SUB_ID]));
            vec![rpc_result(&request["id"], json!(true))]
        }
        other => panic!("unexpected method {other}"),
    })
    .await;

    let client = WsClient::connect(&server.url()).await.unwrap();
    let (heads_tx, mut heads_rx) = mpsc::unbounded_channel();

    let subscription = client
        .eth_subscribe(SubscriptionKind::NewHeads, None, move |payload| {
            let heads_tx = heads_tx.clone();
            async move {
                heads_tx.send(payload).unwrap();
            }
        })
        .await
        .unwrap();
    assert_eq!(subscription.id(), SUB_ID);

    // Trigger one push.
    client.call("net_version", CallArgs::new()).await.unwrap();
    let head = timeout(Duration::from_secs(1), heads_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(head, json!({"number": "0x77"}));

    // After unsubscribing, further pushes are dropped.
    client.eth_unsubscribe(&subscription).await.unwrap();
    client.call("net_version", CallArgs::new()).await.unwrap();
    assert!(timeout(Duration::from_millis(200), heads_rx.recv())
        .await
        .is_err());
}

#[tokio::test]
async fn test_logs_subscription_carries_filter() {
    let server = MockWsServer::start(|request| match request["method"].as_str().unwrap() {
        "eth_subscribe" => {
            assert_eq!(request["params"][0], json!("logs"));
            assert_eq!(
                request["params"][1],
                json!({"fromBlock": "0x1", "topics": ["0x12341234"]})
            );
            vec![rpc_result(&request["id"], json!("0x1a2b"))]
        }
        other => panic!("unexpected method {other}"),
    })
    .await;

    let client = WsClient::connect(&server.url()).await.unwrap();
    let filter = ethrpc_core::params::FilterOptions::new()
        .from_block(1u64)
        .topics(["0x12341234"]);
    let subscription = client
        .eth_subscribe(SubscriptionKind::Logs, Some(&filter), |_| async {})
        .await
        .unwrap();
    assert_eq!(subscription.id(), "0x1a2b");
}

#[tokio::test]
async fn test_parity_subscribe_nests_inner_call() {
    let server = MockWsServer::start(|request| match request["method"].as_str().unwrap() {
        "parity_subscribe" => {
            assert_eq!(request["params"], json!(["eth_getBalance", ["0x1234", "latest"]]));
            vec![rpc_result(&request["id"], json!("0x2c"))]
        }
        other => panic!("unexpected method {other}"),
    })
    .await;

    let client = WsClient::connect(&server.url()).await.unwrap();
    let subscription = client
        .parity_subscribe(
            "eth_get_balance",
            CallArgs::new().arg(json!("0x1234")),
            |_| async {},
        )
        .await
        .unwrap();
    assert_eq!(subscription.id(), "0x2c");
}

#[tokio::test]
async fn test_binding_failure_sends_no_frame() {
    let frames = Arc::new(AtomicUsize::new(0));
    let frames_in_handler = frames.clone();
    let server = MockWsServer::start(move |request| {
        frames_in_handler.fetch_add(1, Ordering::SeqCst);
        vec![rpc_result(&request["id"], json!(null))]
    })
    .await;

    let client = WsClient::connect(&server.url()).await.unwrap();

    let err = client.call("eth_getBalnce", CallArgs::new()).await.unwrap_err();
    assert!(matches!(err, Error::UnknownMethod(_)));

    let err = client
        .call("eth_getBalance", CallArgs::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingArgument { .. }));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(frames.load(Ordering::SeqCst), 0);
}
