//! Pending-request tracking for the WebSocket transport
//!
//! Responses on a multiplexed socket arrive asynchronously and out of
//! order, so each outgoing request registers a oneshot channel keyed by
//! its id before it is sent. The receive loop completes the channel
//! when the matching response frame arrives; when the connection dies,
//! every pending request is failed at once.
//!
//! Ids are assigned here, monotonically. This deliberately overrides
//! the fixed per-method id constants used on HTTP: a shared socket
//! has to correlate by id, and constant ids would collide across
//! concurrent calls.

use ethrpc_core::{Error, Id, JsonRpcResponse, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};

/// A request awaiting its response.
pub(crate) struct PendingRequest {
    tx: oneshot::Sender<Result<JsonRpcResponse>>,
}

/// Tracks pending requests and assigns request ids.
#[derive(Clone)]
pub(crate) struct RequestManager {
    pending: Arc<Mutex<HashMap<i64, PendingRequest>>>,
    counter: Arc<AtomicI64>,
}

impl RequestManager {
    pub(crate) fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(HashMap::new())),
            counter: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Next monotonic request id.
    pub(crate) fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Register a pending request under a numeric id.
    pub(crate) async fn register(&self, id: i64) -> oneshot::Receiver<Result<JsonRpcResponse>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id, PendingRequest { tx });
        rx
    }

    /// Complete the pending request matching a response's id.
    ///
    /// Responses with unknown or non-numeric ids are dropped; the node
    /// only ever echoes ids this client assigned.
    pub(crate) async fn complete(&self, response: JsonRpcResponse) {
        let Id::Number(id) = response.id else {
            tracing::warn!(id = %response.id, "response with non-numeric id");
            return;
        };
        if let Some(pending) = self.pending.lock().await.remove(&id) {
            let _ = pending.tx.send(Ok(response));
        } else {
            tracing::debug!(id, "response for unknown request id");
        }
    }

    /// Fail every pending request with the same error.
    pub(crate) async fn fail_all(&self, error: Error) {
        let mut pending = self.pending.lock().await;
        for (_, request) in pending.drain() {
            let _ = request.tx.send(Err(error.clone()));
        }
    }

    #[cfg(test)]
    pub(crate) async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(id: i64) -> JsonRpcResponse {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(json!("0x0")),
            error: None,
            id: Id::Number(id),
        }
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let manager = RequestManager::new();
        assert_eq!(manager.next_id(), 0);
        assert_eq!(manager.next_id(), 1);
        assert_eq!(manager.next_id(), 2);
    }

    #[tokio::test]
    async fn test_register_and_complete() {
        let manager = RequestManager::new();
        let rx = manager.register(7).await;
        assert_eq!(manager.pending_count().await, 1);

        manager.complete(response(7)).await;
        assert_eq!(manager.pending_count().await, 0);

        let completed = rx.await.unwrap().unwrap();
        assert_eq!(completed.result, Some(json!("0x0")));
    }

    #[tokio::test]
    async fn test_unknown_id_is_dropped() {
        let manager = RequestManager::new();
        let _rx = manager.register(1).await;
        manager.complete(response(99)).await;
        assert_eq!(manager.pending_count().await, 1);
    }

    #[tokio::test]
    async fn test_fail_all() {
        let manager = RequestManager::new();
        let rx1 = manager.register(1).await;
        let rx2 = manager.register(2).await;

        manager.fail_all(Error::ConnectionClosed).await;
        assert_eq!(manager.pending_count().await, 0);
        assert!(rx1.await.unwrap().is_err());
        assert!(rx2.await.unwrap().is_err());
    }
}
