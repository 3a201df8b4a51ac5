//! In-process WebSocket node stub for client integration tests
//!
//! Accepts connections on an ephemeral port and feeds every incoming
//! text frame, parsed as JSON, to a handler that decides which frames
//! to send back. Replies go out in the order the handler returns them,
//! so tests can stage out-of-order responses and subscription pushes
//! deterministically on the single-socket FIFO.

use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

/// Maps one incoming request to the frames to send back.
pub type Handler = Arc<dyn Fn(Value) -> Vec<String> + Send + Sync>;

pub struct MockWsServer {
    addr: SocketAddr,
}

impl MockWsServer {
    /// Start a server; each incoming request value is passed to
    /// `handler` and the returned frames are sent back in order.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(Value) -> Vec<String> + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(handle_connection(stream, handler.clone()));
            }
        });

        Self { addr }
    }

    pub fn url(&self) -> String {
        format!("ws://{}", self.addr)
    }
}

async fn handle_connection(stream: TcpStream, handler: Handler) {
    let mut ws = accept_async(stream).await.unwrap();
    while let Some(Ok(frame)) = ws.next().await {
        match frame {
            Message::Text(text) => {
                let request: Value = serde_json::from_str(&text).unwrap();
                for reply in handler(request) {
                    ws.send(Message::Text(reply)).await.unwrap();
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}

/// A response frame echoing the request's id.
pub fn rpc_result(id: &Value, result: Value) -> String {
    serde_json::json!({"jsonrpc": "2.0", "result": result, "id": id}).to_string()
}

/// A subscription push frame for a subscription identifier.
pub fn subscription_push(method: &str, subscription_id: &str, result: Value) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": {"subscription": subscription_id, "result": result},
    })
    .to_string()
}
