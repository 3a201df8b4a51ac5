//! Ethereum JSON-RPC client transports and dispatch surface
//!
//! This crate delivers requests built by `ethrpc-core` to a node over
//! HTTP or WebSocket and exposes the full typed method surface of the
//! Geth/Parity API (~240 methods, each under its snake_case spelling).
//!
//! # Call strategies
//!
//! Exactly one strategy per client instance:
//!
//! - [`Client`] - blocking HTTP; each call returns the raw
//!   `reqwest::blocking::Response` once the response has arrived
//! - [`AsyncClient`] - async HTTP; each call returns a pending value,
//!   and [`join_all`] aggregates pending calls preserving issue order
//! - [`WsClient`] - persistent WebSocket with id-correlated responses
//!   and subscription push routing
//!
//! All three also expose a dynamic `call(name, args)` accepting either
//! spelling of any supported method.
//!
//! The client interprets nothing past the transport: the JSON-RPC
//! `result`/`error` envelope comes back to the caller as received, and
//! there are no retries, no backoff, and no timeout policy beyond the
//! transport's own.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ethrpc_client::Client;
//!
//! fn main() -> ethrpc_core::Result<()> {
//!     let client = Client::localhost()?;
//!
//!     // Typed surface; the default block tag fills the omitted argument.
//!     let response = client.eth_get_balance("0x407d73d8a49eeb85d32cf465507dd71d507100c1", None)?;
//!     println!("status: {}", response.status());
//!
//!     // Dynamic surface, either spelling.
//!     use ethrpc_core::CallArgs;
//!     let response = client.call("eth_block_number", CallArgs::new())?;
//!     println!("status: {}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! # Concurrent pending calls
//!
//! ```rust,no_run
//! use ethrpc_client::{join_all, AsyncClient};
//!
//! # async fn example() -> ethrpc_core::Result<()> {
//! let client = AsyncClient::localhost()?;
//! let addresses = [
//!     "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
//!     "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae",
//!     "0x8543d04b5dc1ba6579132b143087c68db903239f",
//! ];
//! let pending = addresses.iter().map(|a| client.eth_get_balance(a, None));
//! let responses = join_all(pending).await;
//! assert_eq!(responses.len(), 3);
//! # Ok(())
//! # }
//! ```

mod api;
mod config;
mod http;
mod request;
mod subscription;
mod ws;

pub use config::{ClientConfig, LOCALHOST_HTTP_ENDPOINT, LOCALHOST_WS_ENDPOINT};
pub use http::{AsyncClient, Client};
pub use subscription::SubscriptionFn;
pub use ws::{Subscription, WsClient};

/// Aggregate pending calls into one future resolving in issue order.
pub use futures::future::join_all;

// The core crate is the other half of the public API; re-export it the
// way callers use it.
pub use ethrpc_core::{builder, codec, params, registry};
pub use ethrpc_core::{CallArgs, Error, Id, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse};

/// Result type for client operations.
pub type Result<T> = ethrpc_core::Result<T>;

/// Serialize one argument value for the request builder.
pub(crate) fn val<T: serde::Serialize>(value: T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))
}
