//! Error types for ethrpc
//!
//! Errors fall into three layers, mirroring how a call proceeds:
//!
//! 1. **Name resolution** - the method name is not in the registry
//!    (`UnknownMethod`). Surfaced before anything else happens.
//! 2. **Argument binding** - the caller's positional/keyword arguments
//!    do not satisfy the method's parameter spec (`MissingArgument`,
//!    `DuplicateArgument`, `UnexpectedArgument`, `TooManyArguments`).
//!    Surfaced before any network I/O.
//! 3. **Transport** - HTTP or WebSocket delivery failed (`Http`,
//!    `WebSocket`, `ConnectionClosed`, `ChannelClosed`). Passed through
//!    from the underlying transport without retries.
//!
//! A JSON-RPC application error (the `error` member of a response body)
//! is deliberately NOT an `Error` variant: the response is handed back
//! to the caller unparsed, and interpreting the envelope is the
//! caller's job.

use thiserror::Error;

/// Result type for ethrpc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while resolving, building, or delivering a call.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The method name matches neither a snake-case alias nor a wire
    /// name in the registry. No fuzzy matching is attempted.
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// A required parameter was neither bound positionally nor by
    /// keyword.
    #[error("{method}: missing required argument `{param}`")]
    MissingArgument {
        /// Wire name of the method being called
        method: &'static str,
        /// Name of the unbound parameter
        param: &'static str,
    },

    /// A parameter was bound both positionally and by keyword.
    #[error("{method}: argument `{param}` bound more than once")]
    DuplicateArgument {
        /// Wire name of the method being called
        method: &'static str,
        /// Name of the doubly bound parameter
        param: &'static str,
    },

    /// A keyword argument does not match any declared parameter.
    #[error("{method}: unexpected keyword argument `{param}`")]
    UnexpectedArgument {
        /// Wire name of the method being called
        method: &'static str,
        /// The unrecognized keyword
        param: String,
    },

    /// More positional arguments than declared parameters.
    #[error("{method}: takes at most {expected} arguments, {given} given")]
    TooManyArguments {
        /// Wire name of the method being called
        method: &'static str,
        /// Number of declared parameters
        expected: usize,
        /// Number of positional arguments supplied
        given: usize,
    },

    /// An argument value could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// HTTP transport failure (connection refused, timeout, malformed
    /// response at the HTTP level). Passed through as-is; never retried.
    #[error("http error: {0}")]
    Http(String),

    /// WebSocket transport failure.
    #[error("websocket error: {0}")]
    WebSocket(String),

    /// The persistent connection is no longer active.
    #[error("connection closed")]
    ConnectionClosed,

    /// A pending request's response channel was dropped before a
    /// response arrived, usually because the receive loop exited.
    #[error("response channel closed")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_method_message() {
        let err = Error::UnknownMethod("eth_getBalnce".to_string());
        assert_eq!(err.to_string(), "unknown method: eth_getBalnce");
    }

    #[test]
    fn test_binding_error_messages() {
        let err = Error::MissingArgument {
            method: "eth_getBalance",
            param: "address",
        };
        assert_eq!(
            err.to_string(),
            "eth_getBalance: missing required argument `address`"
        );

        let err = Error::TooManyArguments {
            method: "web3_clientVersion",
            expected: 0,
            given: 2,
        };
        assert_eq!(
            err.to_string(),
            "web3_clientVersion: takes at most 0 arguments, 2 given"
        );
    }
}
