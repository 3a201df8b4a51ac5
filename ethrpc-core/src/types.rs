//! JSON-RPC 2.0 message types for the Ethereum wire protocol
//!
//! This module implements the JSON-RPC 2.0 envelope as spoken by
//! Geth/Parity nodes. A request carries `jsonrpc`, `method`, `params`
//! and `id`; the node answers with a response carrying the same `id`
//! and either a `result` or an `error` member.
//!
//! Two deliberate deviations from a general-purpose JSON-RPC
//! implementation:
//!
//! - `params` is always serialized, even when empty. Nullary methods
//!   such as `web3_clientVersion` are sent as `"params": []` on the
//!   wire, matching the node documentation.
//! - The `error` member of a response is kept as raw JSON. This client
//!   does not interpret JSON-RPC application errors; discriminating
//!   `result` from `error` is the caller's job.
//!
//! # Request IDs
//!
//! JSON-RPC 2.0 allows string, number, or null IDs. The HTTP transports use
//! the per-method id constants from the method registry; the
//! WebSocket transport overrides the id with a monotonic counter, since
//! it multiplexes concurrent calls over one socket and must correlate
//! responses by id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC 2.0 request ID.
///
/// Serialized untagged, so it appears on the wire directly as a string,
/// a number, or null. Implements `Hash` and `Eq` so the WebSocket
/// transport can key its pending-request map by id.
///
/// # Examples
///
/// ```rust
/// use ethrpc_core::Id;
///
/// let id: Id = 67i64.into();
/// assert_eq!(id.to_string(), "67");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier
    String(String),
    /// Numeric identifier (the form used by this client)
    Number(i64),
    /// Null identifier - allowed by spec but makes correlation impossible
    Null,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "\"{}\"", s),
            Id::Number(n) => write!(f, "{}", n),
            Id::Null => write!(f, "null"),
        }
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::String(s)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Id::Number(n as i64)
    }
}

/// JSON-RPC 2.0 request message.
///
/// Constructed by the request builder from a method registry entry and
/// the caller's bound arguments, then handed to a transport. Requests
/// are built fresh per call and discarded after transmission; nothing
/// is retained between calls.
///
/// # Examples
///
/// ```rust
/// use ethrpc_core::{Id, JsonRpcRequest};
/// use serde_json::json;
///
/// let req = JsonRpcRequest::new("web3_clientVersion", json!([]), Id::Number(67));
/// assert_eq!(req.jsonrpc, "2.0");
/// assert_eq!(
///     serde_json::to_string(&req).unwrap(),
///     r#"{"jsonrpc":"2.0","method":"web3_clientVersion","params":[],"id":67}"#
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// Canonical wire name of the method, e.g. `eth_getBalance`
    pub method: String,
    /// Positional parameters; always present, usually a JSON array
    pub params: serde_json::Value,
    /// Identifier correlating this request with its response
    pub id: Id,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC 2.0 request.
    ///
    /// The `jsonrpc` field is set to "2.0" per the specification.
    pub fn new(method: impl Into<String>, params: serde_json::Value, id: Id) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Replace the request id, returning the modified request.
    ///
    /// Used by the WebSocket transport, which assigns its own ids for
    /// response correlation.
    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }
}

/// JSON-RPC 2.0 response message.
///
/// Exactly one of `result` and `error` is present in a well-formed
/// response. Both are kept as raw JSON values: this client performs no
/// interpretation of the response envelope, so a node-side error
/// arrives here intact for the caller to inspect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// Result of the call, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error object, present on failure; not interpreted by this client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    /// Id of the originating request
    pub id: Id,
}

/// JSON-RPC 2.0 notification message.
///
/// A server-to-client message without an `id`. Ethereum nodes push
/// subscription events this way: the method is `eth_subscription` (or
/// the `parity_`/`shh_` equivalent) and `params` carries the
/// subscription identifier plus the event payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// Notification method, e.g. `eth_subscription`
    pub method: String,
    /// Notification payload
    pub params: serde_json::Value,
}

/// Any incoming JSON-RPC 2.0 frame on a persistent connection.
///
/// The WebSocket receive loop decodes each text frame into this enum to
/// decide whether it completes a pending request (response, matched by
/// id) or belongs to a subscription stream (notification).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    /// A response to a previously issued request
    Response(JsonRpcResponse),
    /// A server-initiated notification (subscription push)
    Notification(JsonRpcNotification),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_display() {
        assert_eq!(Id::String("test".to_string()).to_string(), "\"test\"");
        assert_eq!(Id::Number(67).to_string(), "67");
        assert_eq!(Id::Null.to_string(), "null");
    }

    #[test]
    fn test_request_serialization() {
        let req = JsonRpcRequest::new("net_version", json!([]), Id::Number(67));
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"method\":\"net_version\""));
        assert!(json.contains("\"params\":[]"));
        assert!(json.contains("\"id\":67"));
    }

    #[test]
    fn test_with_id() {
        let req = JsonRpcRequest::new("eth_blockNumber", json!([]), Id::Number(83));
        let req = req.with_id(Id::Number(3));
        assert_eq!(req.id, Id::Number(3));
    }

    #[test]
    fn test_message_decode_response() {
        let frame = r#"{"jsonrpc":"2.0","result":"0x41","id":1}"#;
        let message: JsonRpcMessage = serde_json::from_str(frame).unwrap();
        match message {
            JsonRpcMessage::Response(resp) => {
                assert_eq!(resp.result, Some(json!("0x41")));
                assert_eq!(resp.id, Id::Number(1));
            }
            JsonRpcMessage::Notification(_) => panic!("expected response"),
        }
    }

    #[test]
    fn test_message_decode_notification() {
        let frame = r#"{"jsonrpc":"2.0","method":"eth_subscription","params":{"subscription":"0x9cef478923ff08bf67fde6c64013158d","result":{}}}"#;
        let message: JsonRpcMessage = serde_json::from_str(frame).unwrap();
        match message {
            JsonRpcMessage::Notification(notif) => {
                assert_eq!(notif.method, "eth_subscription");
                assert_eq!(
                    notif.params["subscription"],
                    json!("0x9cef478923ff08bf67fde6c64013158d")
                );
            }
            JsonRpcMessage::Response(_) => panic!("expected notification"),
        }
    }

    #[test]
    fn test_error_member_kept_raw() {
        let frame = r#"{"jsonrpc":"2.0","error":{"code":-32601,"message":"Method not found"},"id":67}"#;
        let resp: JsonRpcResponse = serde_json::from_str(frame).unwrap();
        assert!(resp.result.is_none());
        assert_eq!(resp.error.unwrap()["code"], json!(-32601));
    }
}
