//! HTTP transport integration tests
//!
//! Stubs the node with mockito and verifies the exact request bodies
//! the clients put on the wire, for both call strategies.

use ethrpc_client::{AsyncClient, Client, ClientConfig};
use ethrpc_core::params::{BlockTag, TransactionRequest};
use ethrpc_core::{CallArgs, Error};
use mockito::Matcher;
use serde_json::json;

const ADDRESS: &str = "0x407d73d8a49eeb85d32cf465507dd71d507100c1";

fn rpc_result(result: serde_json::Value, id: i64) -> String {
    json!({"jsonrpc": "2.0", "result": result, "id": id}).to_string()
}

#[test]
fn test_client_version_exact_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "method": "web3_clientVersion",
            "params": [],
            "id": 67,
        })))
        .with_header("content-type", "application/json")
        .with_body(rpc_result(json!("Parity//v1.7.0"), 67))
        .create();

    let client = Client::new(server.url()).unwrap();
    let response = client.web3_client_version().unwrap();
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["result"], "Parity//v1.7.0");
    mock.assert();
}

#[test]
fn test_both_spellings_hit_one_wire_method() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "web3_clientVersion"})))
        .with_body(rpc_result(json!("Geth/v1.8"), 67))
        .expect(2)
        .create();

    let client = Client::new(server.url()).unwrap();
    client.call("web3_client_version", CallArgs::new()).unwrap();
    client.call("web3_clientVersion", CallArgs::new()).unwrap();
    mock.assert();
}

#[test]
fn test_balance_default_block_applied() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "method": "eth_getBalance",
            "params": [ADDRESS, "latest"],
            "id": 1,
        })))
        .with_body(rpc_result(json!("0x0234c8a3397aab58"), 1))
        .create();

    let client = Client::new(server.url()).unwrap();
    let response = client.eth_get_balance(ADDRESS, None).unwrap();
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["result"], "0x0234c8a3397aab58");
    mock.assert();
}

#[test]
fn test_configured_default_block() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBalance",
            "params": [ADDRESS, "pending"],
        })))
        .with_body(rpc_result(json!("0x0"), 1))
        .create();

    let config = ClientConfig::new(server.url()).default_block(BlockTag::Pending);
    let client = Client::with_config(config).unwrap();
    client.eth_get_balance(ADDRESS, None).unwrap();
    mock.assert();
}

#[test]
fn test_block_argument_overrides_default() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBalance",
            "params": [ADDRESS, "0x4b7"],
        })))
        .with_body(rpc_result(json!("0x0"), 1))
        .create();

    let client = Client::new(server.url()).unwrap();
    client.eth_get_balance(ADDRESS, Some(1207u64.into())).unwrap();
    mock.assert();
}

#[test]
fn test_transaction_object_on_wire() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "method": "eth_sendTransaction",
            "params": [{
                "from": ADDRESS,
                "to": "0xd46e8dd67c5d32be8058bb8eb970870f07244567",
                "gas": "0x76c0",
                "value": "0x9184e72a",
            }],
            "id": 1,
        })))
        .with_body(rpc_result(json!("0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5"), 1))
        .create();

    let client = Client::new(server.url()).unwrap();
    let transaction = TransactionRequest::new()
        .from(ADDRESS)
        .to("0xd46e8dd67c5d32be8058bb8eb970870f07244567")
        .gas(30_400)
        .value(2_441_406_250);
    client.eth_send_transaction(&transaction).unwrap();
    mock.assert();
}

#[test]
fn test_node_error_returned_uninterpreted() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "error": {"code": -32601, "message": "Method not found"},
                "id": 67,
            })
            .to_string(),
        )
        .create();

    let client = Client::new(server.url()).unwrap();
    // The call itself succeeds; the JSON-RPC error is the caller's to
    // find in the body.
    let response = client.web3_client_version().unwrap();
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["error"]["code"], -32601);
}

#[test]
fn test_transport_failure_passthrough() {
    let client = Client::new("http://127.0.0.1:1").unwrap();
    let err = client.web3_client_version().unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[test]
fn test_binding_failure_never_reaches_server() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").expect(0).create();

    let client = Client::new(server.url()).unwrap();
    let err = client
        .call("eth_getBalance", CallArgs::new().kwarg("blok", json!("latest")))
        .unwrap_err();
    assert!(matches!(err, Error::UnexpectedArgument { .. }));

    let err = client.call("eth_getBalnce", CallArgs::new()).unwrap_err();
    assert!(matches!(err, Error::UnknownMethod(_)));

    mock.assert();
}

#[tokio::test]
async fn test_async_client_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "method": "eth_blockNumber",
            "params": [],
            "id": 83,
        })))
        .with_body(rpc_result(json!("0x4b7"), 83))
        .create_async()
        .await;

    let client = AsyncClient::new(server.url()).unwrap();
    let response = client.eth_block_number().await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["result"], "0x4b7");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_async_dynamic_surface() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getStorageAt",
            "params": [ADDRESS, "0x0", "latest"],
        })))
        .with_body(rpc_result(json!("0x03"), 1))
        .create_async()
        .await;

    let client = AsyncClient::new(server.url()).unwrap();
    let args = CallArgs::new().arg(json!(ADDRESS)).arg(json!("0x0"));
    client.call("eth_get_storage_at", args).await.unwrap();
    mock.assert_async().await;
}
