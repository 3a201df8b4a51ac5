//! HTTP transports
//!
//! Two call strategies over the same dispatch surface:
//!
//! - [`Client`] executes each call synchronously on the calling thread
//!   and returns the [`reqwest::blocking::Response`] once the full
//!   response has been received.
//! - [`AsyncClient`] returns a pending call that resolves on an await
//!   point; calls issued before any is awaited overlap on the runtime's
//!   I/O wait, and [`futures::future::join_all`] aggregates pending
//!   calls in issue order.
//!
//! Both strategies POST the JSON request body to the configured
//! endpoint and return the response handle unparsed: status, headers,
//! and the JSON-RPC envelope (including any `error` member) are for
//! the caller to inspect. The underlying reqwest client keeps its
//! connections alive across calls; there is no pooling, retry, or
//! timeout policy on top of what reqwest itself does.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ethrpc_client::Client;
//!
//! fn main() -> ethrpc_core::Result<()> {
//!     let client = Client::localhost()?;
//!     let response = client.web3_client_version()?;
//!     let body: serde_json::Value = response.json().map_err(|e| {
//!         ethrpc_core::Error::Http(e.to_string())
//!     })?;
//!     println!("client version: {}", body["result"]);
//!     Ok(())
//! }
//! ```

use crate::config::{ClientConfig, LOCALHOST_HTTP_ENDPOINT};
use ethrpc_core::builder::{self, CallArgs};
use ethrpc_core::params::BlockTag;
use ethrpc_core::{Error, Result};

/// Blocking HTTP client.
///
/// One network call fully occupies the calling thread. The wrapped
/// reqwest session is reused across calls for connection keep-alive.
/// Not for use inside an async runtime; use [`AsyncClient`] there.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl Client {
    /// Connect-on-demand client for an endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(endpoint))
    }

    /// Client for a locally running node (`http://127.0.0.1:8545`).
    pub fn localhost() -> Result<Self> {
        Self::new(LOCALHOST_HTTP_ENDPOINT)
    }

    /// Client with explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// The block tag substituted for omitted block arguments.
    pub fn default_block(&self) -> BlockTag {
        self.config.default_block
    }

    /// Call a method by either spelling with dynamic arguments.
    ///
    /// Name resolution and argument binding happen before any network
    /// I/O; a binding failure never reaches the transport. The typed
    /// methods on this client all go through here.
    #[tracing::instrument(skip(self, args), fields(endpoint = %self.config.endpoint))]
    pub fn call(&self, method: &str, args: CallArgs) -> Result<reqwest::blocking::Response> {
        let request = builder::build(method, args, self.config.default_block)?;
        tracing::debug!(rpc.method = %request.method, rpc.id = %request.id, "sending request");
        self.http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .map_err(|e| Error::Http(e.to_string()))
    }
}

/// Asynchronous HTTP client.
///
/// `call` (and every typed method) returns a pending value; the network
/// I/O runs when the caller awaits it. Issuing several calls before
/// awaiting any lets their I/O overlap on the runtime without threads.
///
/// # Examples
///
/// ```rust,no_run
/// use ethrpc_client::AsyncClient;
/// use futures::future::join_all;
///
/// # async fn example() -> ethrpc_core::Result<()> {
/// let client = AsyncClient::localhost()?;
/// let addresses = [
///     "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
///     "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae",
/// ];
/// let pending = addresses.iter().map(|a| client.eth_get_balance(a, None));
/// // Resolves in issue order regardless of completion order.
/// for response in join_all(pending).await {
///     let response = response?;
///     println!("{}", response.status());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AsyncClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl AsyncClient {
    /// Connect-on-demand client for an endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(endpoint))
    }

    /// Client for a locally running node (`http://127.0.0.1:8545`).
    pub fn localhost() -> Result<Self> {
        Self::new(LOCALHOST_HTTP_ENDPOINT)
    }

    /// Client with explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// The block tag substituted for omitted block arguments.
    pub fn default_block(&self) -> BlockTag {
        self.config.default_block
    }

    /// Call a method by either spelling with dynamic arguments.
    ///
    /// Binding failures surface on the first poll, before any network
    /// I/O is attempted.
    #[tracing::instrument(skip(self, args), fields(endpoint = %self.config.endpoint))]
    pub async fn call(&self, method: &str, args: CallArgs) -> Result<reqwest::Response> {
        let request = builder::build(method, args, self.config.default_block)?;
        tracing::debug!(rpc.method = %request.method, rpc.id = %request.id, "sending request");
        self.http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Binding failures must surface without touching the network; an
    // unroutable endpoint makes an attempted request fail differently.
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

    #[test]
    fn test_unknown_method_fails_before_transport() {
        let client = Client::new(DEAD_ENDPOINT).unwrap();
        let err = client.call("eth_getBalnce", CallArgs::new()).unwrap_err();
        assert!(matches!(err, Error::UnknownMethod(_)));
    }

    #[test]
    fn test_binding_failure_before_transport() {
        let client = Client::new(DEAD_ENDPOINT).unwrap();
        let args = CallArgs::new()
            .arg(json!("0x407d73d8a49eeb85d32cf465507dd71d507100c1"))
            .kwarg("blok", json!("latest"));
        let err = client.call("eth_getBalance", args).unwrap_err();
        assert!(matches!(err, Error::UnexpectedArgument { .. }));
    }

    #[tokio::test]
    async fn test_async_binding_failure_before_transport() {
        let client = AsyncClient::new(DEAD_ENDPOINT).unwrap();
        let err = client
            .call("eth_getBalance", CallArgs::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingArgument { .. }));
    }
}
