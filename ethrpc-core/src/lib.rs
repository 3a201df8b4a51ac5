//! Core types and request construction for the Ethereum JSON-RPC API
//!
//! This crate is the transport-agnostic half of ethrpc. It knows the
//! complete method table of the Geth/Parity JSON-RPC surface and how to
//! turn a method name plus arguments into a JSON-RPC 2.0 request; it
//! does not know how to deliver one. The `ethrpc-client` crate builds
//! the HTTP and WebSocket transports on top of this foundation.
//!
//! - **Types**: the JSON-RPC 2.0 envelope ([`JsonRpcRequest`],
//!   [`JsonRpcResponse`], [`JsonRpcNotification`], [`Id`])
//! - **Registry**: the static method table with snake/camel name pairs,
//!   fixed id constants, and per-method parameter specs
//! - **Builder**: positional/keyword argument binding and default
//!   substitution
//! - **Params**: typed wire encodings (hex quantities, block tags,
//!   transaction and filter objects)
//! - **Errors**: binding and transport error types
//!
//! # Example
//!
//! ```rust
//! use ethrpc_core::builder::{self, CallArgs};
//! use ethrpc_core::params::BlockTag;
//! use ethrpc_core::registry;
//! use serde_json::json;
//!
//! // Either spelling resolves to the wire name.
//! assert_eq!(registry::resolve("eth_block_number").unwrap(), "eth_blockNumber");
//!
//! // Build a request; omitted optionals take their declared defaults.
//! let args = CallArgs::new().arg(json!("0x407d73d8a49eeb85d32cf465507dd71d507100c1"));
//! let request = builder::build("eth_getBalance", args, BlockTag::Latest).unwrap();
//! assert_eq!(request.params, json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"]));
//! ```

pub mod builder;
pub mod codec;
pub mod error;
pub mod params;
pub mod registry;
pub mod types;

// Re-export the most commonly used items for convenience.
pub use builder::CallArgs;
pub use error::{Error, Result};
pub use registry::{MethodSpec, ParamDefault, ParamSpec};
pub use types::{Id, JsonRpcMessage, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse};
