//! Subscription push routing for the WebSocket transport
//!
//! After a successful `*_subscribe` call the node pushes notification
//! frames whose params carry the subscription identifier it issued and
//! the event payload:
//!
//! ```json
//! {"jsonrpc":"2.0","method":"eth_subscription",
//!  "params":{"subscription":"0x9cef478923ff08bf67fde6c64013158d","result":{...}}}
//! ```
//!
//! The router holds one async handler per subscription identifier and
//! dispatches each incoming payload to it. That id-keyed dispatch is
//! the full extent of stream management here; replay, buffering, and
//! resubscription are the caller's business.

use ethrpc_core::JsonRpcNotification;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handler invoked with each pushed event payload.
pub type SubscriptionFn =
    Arc<dyn Fn(serde_json::Value) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Routes subscription notifications to per-identifier handlers.
#[derive(Clone, Default)]
pub(crate) struct SubscriptionRouter {
    handlers: Arc<Mutex<HashMap<String, SubscriptionFn>>>,
}

impl SubscriptionRouter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a subscription identifier.
    pub(crate) async fn register<F, Fut>(&self, subscription_id: impl Into<String>, handler: F)
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: SubscriptionFn = Arc::new(move |value| Box::pin(handler(value)));
        self.handlers
            .lock()
            .await
            .insert(subscription_id.into(), handler);
    }

    /// Drop the handler for a subscription identifier.
    pub(crate) async fn deregister(&self, subscription_id: &str) {
        self.handlers.lock().await.remove(subscription_id);
    }

    /// Dispatch an incoming notification frame.
    ///
    /// Frames without a recognizable subscription identifier, or for
    /// identifiers without a handler, are logged and dropped.
    pub(crate) async fn route(&self, notification: JsonRpcNotification) {
        let Some(subscription_id) = notification.params["subscription"].as_str() else {
            tracing::debug!(method = %notification.method, "notification without subscription id");
            return;
        };

        let handler = {
            let handlers = self.handlers.lock().await;
            handlers.get(subscription_id).cloned()
        };

        match handler {
            Some(handler) => {
                let payload = notification.params["result"].clone();
                handler(payload).await;
            }
            None => {
                tracing::debug!(subscription_id, "push for unknown subscription");
            }
        }
    }

    #[cfg(test)]
    pub(crate) async fn handler_count(&self) -> usize {
        self.handlers.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn push(subscription_id: &str, result: serde_json::Value) -> JsonRpcNotification {
        JsonRpcNotification {
            jsonrpc: "2.0".to_string(),
            method: "eth_subscription".to_string(),
            params: json!({"subscription": subscription_id, "result": result}),
        }
    }

    #[tokio::test]
    async fn test_route_to_registered_handler() {
        let router = SubscriptionRouter::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_in_handler = hits.clone();

        router
            .register("0x1a2b", move |payload| {
                let hits = hits_in_handler.clone();
                async move {
                    assert_eq!(payload, json!({"number": "0x77"}));
                    hits.fetch_add(1, Ordering::SeqCst);
                }
            })
            .await;

        router.route(push("0x1a2b", json!({"number": "0x77"}))).await;
        router.route(push("0xdead", json!({}))).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_deregister() {
        let router = SubscriptionRouter::new();
        router.register("0x1", |_| async {}).await;
        assert_eq!(router.handler_count().await, 1);
        router.deregister("0x1").await;
        assert_eq!(router.handler_count().await, 0);
    }

    #[tokio::test]
    async fn test_notification_without_id_is_dropped() {
        let router = SubscriptionRouter::new();
        router.register("0x1", |_| async { panic!("must not run") }).await;
        router
            .route(JsonRpcNotification {
                jsonrpc: "2.0".to_string(),
                method: "eth_subscription".to_string(),
                params: json!(["positional"]),
            })
            .await;
    }
}
