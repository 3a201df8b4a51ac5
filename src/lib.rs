//! ethrpc - Rust client bindings for the Ethereum JSON-RPC API
//!
//! This is the convenience crate that re-exports the ethrpc sub-crates.
//! Use it for a single dependency covering request construction and
//! every transport.
//!
//! # Architecture
//!
//! - **ethrpc-core**: JSON-RPC 2.0 envelope types, the ~240-method
//!   registry (snake/camel name pairs, parameter specs, defaults), the
//!   request builder, and typed wire parameters
//! - **ethrpc-client**: blocking HTTP, async HTTP, and WebSocket
//!   transports, plus the generated typed dispatch surface
//!
//! # Quick Start - blocking
//!
//! ```rust,no_run
//! use ethrpc::Client;
//!
//! fn main() -> ethrpc::Result<()> {
//!     let client = Client::localhost()?;
//!     let response = client.web3_client_version()?;
//!     println!("status: {}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! # Quick Start - async
//!
//! ```rust,no_run
//! use ethrpc::{join_all, AsyncClient};
//!
//! #[tokio::main]
//! async fn main() -> ethrpc::Result<()> {
//!     let client = AsyncClient::localhost()?;
//!     let addresses = [
//!         "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
//!         "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae",
//!     ];
//!     let pending = addresses.iter().map(|a| client.eth_get_balance(a, None));
//!     for response in join_all(pending).await {
//!         println!("status: {}", response?.status());
//!     }
//!     Ok(())
//! }
//! ```

// Re-export the sub-crates under stable module names.
pub use ethrpc_client as client;
pub use ethrpc_core as core;

// And the items almost every caller wants directly.
pub use ethrpc_client::{
    join_all, AsyncClient, Client, ClientConfig, Subscription, WsClient,
    LOCALHOST_HTTP_ENDPOINT, LOCALHOST_WS_ENDPOINT,
};
pub use ethrpc_core::{
    builder, codec, params, registry, CallArgs, Error, Id, JsonRpcNotification, JsonRpcRequest,
    JsonRpcResponse, Result,
};
