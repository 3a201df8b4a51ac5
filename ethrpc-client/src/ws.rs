//! WebSocket transport
//!
//! [`WsClient`] holds one persistent connection to a node's WebSocket
//! listener and multiplexes every call over it. A background receive
//! loop decodes incoming text frames: responses complete the pending
//! request with the matching id, subscription pushes are routed to the
//! handler registered for their subscription identifier.
//!
//! Unlike the HTTP transports, requests here carry monotonically
//! increasing ids. The socket is the component that has to correlate
//! concurrent responses, so it owns id assignment; the per-method
//! fixed constants would collide.
//!
//! # Cloning
//!
//! `WsClient` is cheaply cloneable; all clones share the connection,
//! the pending-request map, and the subscription router. Dropping the
//! last clone (or the process exiting) closes the connection; `close`
//! does so explicitly.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ethrpc_client::WsClient;
//! use ethrpc_core::params::SubscriptionKind;
//!
//! # async fn example() -> ethrpc_core::Result<()> {
//! let client = WsClient::connect("ws://127.0.0.1:8546").await?;
//! let subscription = client
//!     .eth_subscribe(SubscriptionKind::NewHeads, None, |head| async move {
//!         println!("new head: {}", head["number"]);
//!     })
//!     .await?;
//! // ... later
//! client.eth_unsubscribe(&subscription).await?;
//! # Ok(())
//! # }
//! ```

use crate::request::RequestManager;
use crate::subscription::SubscriptionRouter;
use crate::val;
use ethrpc_core::builder::{self, CallArgs};
use ethrpc_core::params::{BlockTag, FilterOptions, MessageFilter, SubscriptionKind};
use ethrpc_core::{codec, registry, Error, Id, JsonRpcMessage, JsonRpcResponse, Result};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

/// A live subscription, identified by the token the node issued.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: String,
}

impl Subscription {
    /// The server-issued subscription identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// JSON-RPC client over a persistent WebSocket connection.
#[derive(Clone)]
pub struct WsClient {
    sender: Arc<Mutex<WsSink>>,
    requests: RequestManager,
    subscriptions: SubscriptionRouter,
    default_block: BlockTag,
}

impl WsClient {
    /// Connect to a node's WebSocket listener.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with(url, BlockTag::Latest).await
    }

    /// Connect with an explicit default block tag.
    #[tracing::instrument(skip(url), fields(url = url))]
    pub async fn connect_with(url: &str, default_block: BlockTag) -> Result<Self> {
        let (stream, _) = connect_async(url)
            .await
            .map_err(|e| Error::WebSocket(e.to_string()))?;
        let (sender, receiver) = stream.split();

        let requests = RequestManager::new();
        let subscriptions = SubscriptionRouter::new();
        tokio::spawn(Self::receive_loop(
            receiver,
            requests.clone(),
            subscriptions.clone(),
        ));

        tracing::info!("connected");
        Ok(Self {
            sender: Arc::new(Mutex::new(sender)),
            requests,
            subscriptions,
            default_block,
        })
    }

    /// The block tag substituted for omitted block arguments.
    pub fn default_block(&self) -> BlockTag {
        self.default_block
    }

    async fn receive_loop(
        mut receiver: WsSource,
        requests: RequestManager,
        subscriptions: SubscriptionRouter,
    ) {
        while let Some(frame) = receiver.next().await {
            match frame {
                Ok(Message::Text(text)) => match codec::decode_message(&text) {
                    Ok(JsonRpcMessage::Response(response)) => {
                        requests.complete(response).await;
                    }
                    Ok(JsonRpcMessage::Notification(notification)) => {
                        subscriptions.route(notification).await;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "undecodable frame");
                    }
                },
                Ok(Message::Close(_)) => {
                    tracing::info!("server closed connection");
                    break;
                }
                // Ping/pong and binary frames carry no JSON-RPC traffic.
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(error = %e, "websocket receive failed");
                    break;
                }
            }
        }
        requests.fail_all(Error::ConnectionClosed).await;
    }

    /// Call a method by either spelling with dynamic arguments and wait
    /// for the matching response frame.
    ///
    /// The response envelope is returned as received; an `error` member
    /// from the node arrives intact for the caller to inspect.
    #[tracing::instrument(skip(self, args))]
    pub async fn call(&self, method: &str, args: CallArgs) -> Result<JsonRpcResponse> {
        let request = builder::build(method, args, self.default_block)?;
        let id = self.requests.next_id();
        let request = request.with_id(Id::Number(id));

        // Register before sending so a fast response cannot race the
        // pending-map insert.
        let rx = self.requests.register(id).await;

        let text = codec::encode_request(&request)?;
        self.sender
            .lock()
            .await
            .send(Message::Text(text))
            .await
            .map_err(|e| Error::WebSocket(e.to_string()))?;

        tracing::debug!(rpc.method = %request.method, rpc.id = id, "request sent");
        match rx.await {
            Ok(result) => result,
            Err(_) => Err(Error::ChannelClosed),
        }
    }

    /// Attach a handler for a subscription identifier obtained out of
    /// band (for instance from a dynamic `call`).
    pub async fn on_subscription<F, Fut>(&self, subscription_id: impl Into<String>, handler: F)
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.subscriptions.register(subscription_id, handler).await;
    }

    /// Subscribe to `logs` or `newHeads` events.
    ///
    /// The filter applies to the `logs` kind and is sent as an empty
    /// object otherwise, matching the wire contract.
    pub async fn eth_subscribe<F, Fut>(
        &self,
        kind: SubscriptionKind,
        filter: Option<&FilterOptions>,
        handler: F,
    ) -> Result<Subscription>
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut args = CallArgs::new().arg(val(kind)?);
        if let Some(filter) = filter {
            args = args.kwarg("filter", val(filter)?);
        }
        self.subscribe_call("eth_subscribe", args, handler).await
    }

    /// Cancel an `eth_subscribe` subscription.
    pub async fn eth_unsubscribe(&self, subscription: &Subscription) -> Result<JsonRpcResponse> {
        self.unsubscribe_call("eth_unsubscribe", subscription).await
    }

    /// Subscribe to the result of another RPC method via Parity
    /// pub-sub. The inner method is named by either spelling and bound
    /// like a direct call.
    pub async fn parity_subscribe<F, Fut>(
        &self,
        method: &str,
        args: CallArgs,
        handler: F,
    ) -> Result<Subscription>
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let spec =
            registry::lookup(method).ok_or_else(|| Error::UnknownMethod(method.to_string()))?;
        let inner = builder::bind_params(spec, args, self.default_block)?;
        let outer = CallArgs::new()
            .arg(val(spec.rpc_name)?)
            .arg(serde_json::Value::Array(inner));
        self.subscribe_call("parity_subscribe", outer, handler).await
    }

    /// Cancel a `parity_subscribe` subscription.
    pub async fn parity_unsubscribe(&self, subscription: &Subscription) -> Result<JsonRpcResponse> {
        self.unsubscribe_call("parity_unsubscribe", subscription)
            .await
    }

    /// Subscribe to whisper messages matching a filter.
    pub async fn shh_subscribe<F, Fut>(
        &self,
        filter: &MessageFilter,
        handler: F,
    ) -> Result<Subscription>
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let args = CallArgs::new().arg(val(filter)?);
        self.subscribe_call("shh_subscribe", args, handler).await
    }

    /// Cancel a `shh_subscribe` subscription.
    pub async fn shh_unsubscribe(&self, subscription: &Subscription) -> Result<JsonRpcResponse> {
        self.unsubscribe_call("shh_unsubscribe", subscription).await
    }

    /// Subscribe to the Parity signer's pending-request queue.
    pub async fn signer_subscribe_pending<F, Fut>(&self, handler: F) -> Result<Subscription>
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.subscribe_call("signer_subscribePending", CallArgs::new(), handler)
            .await
    }

    /// Cancel a `signer_subscribePending` subscription.
    pub async fn signer_unsubscribe_pending(
        &self,
        subscription: &Subscription,
    ) -> Result<JsonRpcResponse> {
        self.unsubscribe_call("signer_unsubscribePending", subscription)
            .await
    }

    /// Send a close frame. Pending requests fail with
    /// [`Error::ConnectionClosed`] once the socket shuts down.
    pub async fn close(&self) -> Result<()> {
        self.sender
            .lock()
            .await
            .send(Message::Close(None))
            .await
            .map_err(|e| Error::WebSocket(e.to_string()))
    }

    async fn subscribe_call<F, Fut>(
        &self,
        method: &'static str,
        args: CallArgs,
        handler: F,
    ) -> Result<Subscription>
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let response = self.call(method, args).await?;
        let id = response
            .result
            .as_ref()
            .and_then(|value| value.as_str())
            .ok_or_else(|| Error::WebSocket(format!("{method} returned no subscription id")))?
            .to_string();
        self.subscriptions.register(id.clone(), handler).await;
        tracing::debug!(subscription_id = %id, method, "subscription established");
        Ok(Subscription { id })
    }

    /// Unsubscribe calls send the identifier exactly as the node issued
    /// it; identifiers are opaque tokens, frequently wider than 64 bits.
    async fn unsubscribe_call(
        &self,
        method: &'static str,
        subscription: &Subscription,
    ) -> Result<JsonRpcResponse> {
        let args = CallArgs::new().arg(val(subscription.id.as_str())?);
        let response = self.call(method, args).await?;
        self.subscriptions.deregister(&subscription.id).await;
        Ok(response)
    }
}
