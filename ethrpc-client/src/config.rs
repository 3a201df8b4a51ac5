//! Client configuration
//!
//! The recognized options are deliberately small: the endpoint URL and
//! the default block tag substituted for omitted block arguments.
//! Anything else (timeouts, pooling, retry policy) is left to the
//! underlying transport and the embedding application.

use ethrpc_core::params::BlockTag;

/// Default endpoint of a locally running node's HTTP RPC listener.
pub const LOCALHOST_HTTP_ENDPOINT: &str = "http://127.0.0.1:8545";

/// Default endpoint of a locally running node's WebSocket listener.
pub const LOCALHOST_WS_ENDPOINT: &str = "ws://127.0.0.1:8546";

/// Configuration shared by all client types.
///
/// # Examples
///
/// ```rust
/// use ethrpc_client::ClientConfig;
/// use ethrpc_core::params::BlockTag;
///
/// let config = ClientConfig::new("http://10.0.0.5:8545").default_block(BlockTag::Pending);
/// assert_eq!(config.endpoint, "http://10.0.0.5:8545");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Node endpoint URL
    pub endpoint: String,
    /// Block tag substituted for omitted block arguments
    pub default_block: BlockTag,
}

impl ClientConfig {
    /// Configuration for an endpoint with the default block tag
    /// ("latest").
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            default_block: BlockTag::Latest,
        }
    }

    /// Set the default block tag.
    pub fn default_block(mut self, tag: BlockTag) -> Self {
        self.default_block = tag;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(LOCALHOST_HTTP_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:8545");
        assert_eq!(config.default_block, BlockTag::Latest);
    }

    #[test]
    fn test_default_block_override() {
        let config = ClientConfig::new("http://127.0.0.1:8545").default_block(BlockTag::Earliest);
        assert_eq!(config.default_block, BlockTag::Earliest);
    }
}
