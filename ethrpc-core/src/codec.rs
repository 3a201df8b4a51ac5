//! Codec for JSON-RPC message serialization and deserialization
//!
//! Thin wrappers around serde_json that map serialization failures to
//! `Error::Serialization` and decode incoming WebSocket frames into
//! `JsonRpcMessage` without guessing at their contents. The HTTP
//! transports serialize requests through `encode_request` and return
//! the response body untouched; only the WebSocket transport decodes
//! frames, because it has to tell responses apart from subscription
//! notifications.

use crate::error::{Error, Result};
use crate::types::{JsonRpcMessage, JsonRpcRequest};

/// Encode a request to its wire form.
///
/// # Examples
///
/// ```rust
/// use ethrpc_core::{codec, Id, JsonRpcRequest};
/// use serde_json::json;
///
/// let req = JsonRpcRequest::new("net_listening", json!([]), Id::Number(67));
/// let text = codec::encode_request(&req).unwrap();
/// assert!(text.contains("\"method\":\"net_listening\""));
/// ```
pub fn encode_request(request: &JsonRpcRequest) -> Result<String> {
    serde_json::to_string(request).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode an incoming frame into a response or notification.
///
/// Returns `Error::Serialization` for frames that are neither, such as
/// malformed JSON or envelopes missing both `id` and `method`.
pub fn decode_message(text: &str) -> Result<JsonRpcMessage> {
    serde_json::from_str(text).map_err(|e| Error::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Id;
    use serde_json::json;

    #[test]
    fn test_encode_request() {
        let req = JsonRpcRequest::new(
            "eth_getBalance",
            json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"]),
            Id::Number(1),
        );
        let text = encode_request(&req).unwrap();
        assert_eq!(
            text,
            r#"{"jsonrpc":"2.0","method":"eth_getBalance","params":["0x407d73d8a49eeb85d32cf465507dd71d507100c1","latest"],"id":1}"#
        );
    }

    #[test]
    fn test_decode_response_frame() {
        let frame = r#"{"jsonrpc":"2.0","result":"0x1","id":64}"#;
        assert!(matches!(
            decode_message(frame).unwrap(),
            JsonRpcMessage::Response(_)
        ));
    }

    #[test]
    fn test_decode_malformed_frame() {
        assert!(decode_message("{\"jsonrpc\":").is_err());
    }
}
