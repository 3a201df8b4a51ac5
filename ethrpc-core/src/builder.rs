//! Request builder
//!
//! Turns a method name plus positional/keyword arguments into a
//! [`JsonRpcRequest`]. Binding is checked against the method's
//! parameter spec before any transport is involved:
//!
//! - positional arguments bind in declared order
//! - keyword arguments overlay by name
//! - binding the same parameter twice, naming an undeclared parameter,
//!   exceeding the declared arity, or leaving a required parameter
//!   unbound all fail immediately
//! - unbound optional parameters take their declared default; a default
//!   may be an explicit null, a literal, the configured block tag, or
//!   "absent", in which case the parameter is dropped from `params`
//!
//! No type coercion happens here. Values arrive as JSON and leave as
//! JSON; hex encoding of quantities is the job of the typed helpers in
//! [`crate::params`] (or of the caller, on the dynamic surface).
//!
//! # Examples
//!
//! ```rust
//! use ethrpc_core::builder::{self, CallArgs};
//! use ethrpc_core::params::BlockTag;
//! use serde_json::json;
//!
//! let args = CallArgs::new().arg(json!("0x407d73d8a49eeb85d32cf465507dd71d507100c1"));
//! let req = builder::build("eth_get_balance", args, BlockTag::Latest).unwrap();
//! assert_eq!(req.method, "eth_getBalance");
//! assert_eq!(req.params, json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"]));
//! ```

use crate::error::{Error, Result};
use crate::params::BlockTag;
use crate::registry::{self, Materialized, MethodSpec};
use crate::types::{Id, JsonRpcRequest};

/// Positional and keyword arguments for one call.
///
/// The dynamic counterpart of a typed method signature: positional
/// values bind to parameters in declared order, keyword values bind by
/// name. Values are raw JSON; callers are responsible for wire
/// formatting (the typed dispatch surface does this via
/// [`crate::params`]).
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    positional: Vec<serde_json::Value>,
    keyword: Vec<(String, serde_json::Value)>,
}

impl CallArgs {
    /// No arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: serde_json::Value) -> Self {
        self.positional.push(value);
        self
    }

    /// Append a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.keyword.push((name.into(), value));
        self
    }

    /// Number of arguments bound so far.
    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    /// Whether no arguments are bound.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

/// Build a request for a method named by either spelling.
///
/// `default_block` is substituted for unbound block-position parameters
/// whose default is the configured block tag.
pub fn build(method: &str, args: CallArgs, default_block: BlockTag) -> Result<JsonRpcRequest> {
    let spec =
        registry::lookup(method).ok_or_else(|| Error::UnknownMethod(method.to_string()))?;
    build_for(spec, args, default_block)
}

/// Build a request against an already resolved method spec.
pub fn build_for(
    spec: &'static MethodSpec,
    args: CallArgs,
    default_block: BlockTag,
) -> Result<JsonRpcRequest> {
    let params = bind_params(spec, args, default_block)?;
    tracing::trace!(method = spec.rpc_name, params = params.len(), "request built");
    Ok(JsonRpcRequest::new(
        spec.rpc_name,
        serde_json::Value::Array(params),
        Id::Number(spec.id),
    ))
}

/// Bind arguments against a method spec, producing the `params` array.
///
/// Exposed separately because `parity_subscribe` nests the bound params
/// of an inner method call inside its own parameter list.
pub fn bind_params(
    spec: &'static MethodSpec,
    args: CallArgs,
    default_block: BlockTag,
) -> Result<Vec<serde_json::Value>> {
    if args.positional.len() > spec.params.len() {
        return Err(Error::TooManyArguments {
            method: spec.rpc_name,
            expected: spec.params.len(),
            given: args.positional.len(),
        });
    }

    let mut bound: Vec<Option<serde_json::Value>> = args.positional.into_iter().map(Some).collect();
    bound.resize_with(spec.params.len(), || None);

    for (name, value) in args.keyword {
        let index = spec
            .params
            .iter()
            .position(|param| param.name == name)
            .ok_or_else(|| Error::UnexpectedArgument {
                method: spec.rpc_name,
                param: name.clone(),
            })?;
        if bound[index].is_some() {
            return Err(Error::DuplicateArgument {
                method: spec.rpc_name,
                param: spec.params[index].name,
            });
        }
        bound[index] = Some(value);
    }

    let mut params = Vec::with_capacity(spec.params.len());
    for (slot, param) in bound.into_iter().zip(spec.params) {
        match slot {
            Some(value) => params.push(value),
            None => match param.default.materialize(default_block) {
                Materialized::Value(value) => params.push(value),
                Materialized::Drop => {}
                Materialized::Missing => {
                    return Err(Error::MissingArgument {
                        method: spec.rpc_name,
                        param: param.name,
                    });
                }
            },
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ADDRESS: &str = "0x407d73d8a49eeb85d32cf465507dd71d507100c1";

    #[test]
    fn test_nullary_method() {
        let req = build("web3_client_version", CallArgs::new(), BlockTag::Latest).unwrap();
        assert_eq!(req.method, "web3_clientVersion");
        assert_eq!(req.params, json!([]));
        assert_eq!(req.id, Id::Number(67));

        let req = build("web3_clientVersion", CallArgs::new(), BlockTag::Latest).unwrap();
        assert_eq!(req.method, "web3_clientVersion");
        assert_eq!(req.params, json!([]));
    }

    #[test]
    fn test_default_block_applied() {
        let args = CallArgs::new().arg(json!(ADDRESS));
        let req = build("eth_getBalance", args, BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!([ADDRESS, "latest"]));

        let args = CallArgs::new().arg(json!(ADDRESS));
        let req = build("eth_getBalance", args, BlockTag::Pending).unwrap();
        assert_eq!(req.params, json!([ADDRESS, "pending"]));
    }

    #[test]
    fn test_keyword_overrides_default() {
        let args = CallArgs::new().arg(json!(ADDRESS)).kwarg("block", json!("0x4b7"));
        let req = build("eth_get_balance", args, BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!([ADDRESS, "0x4b7"]));
    }

    #[test]
    fn test_positional_binds_in_order() {
        let args = CallArgs::new().arg(json!(ADDRESS)).arg(json!("earliest"));
        let req = build("eth_getBalance", args, BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!([ADDRESS, "earliest"]));
    }

    #[test]
    fn test_unknown_method() {
        let err = build("eth_getBalnce", CallArgs::new(), BlockTag::Latest).unwrap_err();
        assert!(matches!(err, Error::UnknownMethod(_)));
    }

    #[test]
    fn test_missing_required_argument() {
        let err = build("eth_getBalance", CallArgs::new(), BlockTag::Latest).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingArgument { method: "eth_getBalance", param: "address" }
        ));
    }

    #[test]
    fn test_duplicate_binding() {
        let args = CallArgs::new()
            .arg(json!(ADDRESS))
            .kwarg("address", json!(ADDRESS));
        let err = build("eth_getBalance", args, BlockTag::Latest).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateArgument { method: "eth_getBalance", param: "address" }
        ));
    }

    #[test]
    fn test_unexpected_keyword() {
        let args = CallArgs::new().arg(json!(ADDRESS)).kwarg("blok", json!("latest"));
        let err = build("eth_getBalance", args, BlockTag::Latest).unwrap_err();
        match err {
            Error::UnexpectedArgument { method, param } => {
                assert_eq!(method, "eth_getBalance");
                assert_eq!(param, "blok");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_many_positional() {
        let args = CallArgs::new().arg(json!("a")).arg(json!("b"));
        let err = build("web3_clientVersion", args, BlockTag::Latest).unwrap_err();
        assert!(matches!(err, Error::TooManyArguments { expected: 0, given: 2, .. }));
    }

    #[test]
    fn test_call_requires_block() {
        // eth_call and trace_call refuse to build without a block
        // position; they do not fall back to the default tag.
        for method in ["eth_call", "trace_call"] {
            let args = CallArgs::new().arg(json!({"to": ADDRESS}));
            let err = build(method, args, BlockTag::Latest).unwrap_err();
            assert!(matches!(err, Error::MissingArgument { param: "block", .. }));
        }
    }

    #[test]
    fn test_send_transaction_requires_password() {
        let args = CallArgs::new().arg(json!({"from": ADDRESS}));
        let err = build("personal_sendTransaction", args, BlockTag::Latest).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingArgument { method: "personal_sendTransaction", param: "password" }
        ));
    }

    #[test]
    fn test_required_after_optional_binds_by_keyword() {
        // signer_confirmRequest defaults its modification slot but
        // still demands a password.
        let args = CallArgs::new()
            .arg(json!("0x1"))
            .kwarg("password", json!("hunter2"));
        let req = build("signer_confirmRequest", args, BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!(["0x1", {}, "hunter2"]));

        let args = CallArgs::new().arg(json!("0x1"));
        let err = build("signer_confirm_request_with_token", args, BlockTag::Latest).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { param: "password", .. }));
    }

    #[test]
    fn test_null_default_transmitted() {
        // personal_unlockAccount keeps a null placeholder for the
        // omitted duration.
        let args = CallArgs::new().arg(json!(ADDRESS)).arg(json!("hunter2"));
        let req = build("personal_unlockAccount", args, BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!([ADDRESS, "hunter2", null]));
    }

    #[test]
    fn test_absent_default_dropped() {
        // parity_listAccounts drops its trailing block argument
        // entirely when unbound, rather than sending null.
        let args = CallArgs::new().arg(json!("0x5"));
        let req = build("parity_listAccounts", args, BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!(["0x5", null]));

        let args = CallArgs::new().arg(json!("0x5")).kwarg("block", json!("latest"));
        let req = build("parity_listAccounts", args, BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!(["0x5", null, "latest"]));
    }

    #[test]
    fn test_deterministic_build() {
        let make = || {
            let args = CallArgs::new().arg(json!(ADDRESS)).kwarg("block", json!("0x10"));
            build("eth_getTransactionCount", args, BlockTag::Latest).unwrap()
        };
        let first = make();
        let second = make();
        assert_eq!(first.method, second.method);
        assert_eq!(
            serde_json::to_string(&first.params).unwrap(),
            serde_json::to_string(&second.params).unwrap()
        );
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_literal_defaults() {
        // eth_getBlockByNumber defaults to (latest, false).
        let req = build("eth_getBlockByNumber", CallArgs::new(), BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!(["latest", false]));

        // admin_startRPC carries the documented host/port/cors/apis.
        let req = build("admin_startRPC", CallArgs::new(), BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!(["localhost", "0x2161", "", "eth,net,web3"]));

        // admin_startWS differs only in the port.
        let req = build("admin_start_ws", CallArgs::new(), BlockTag::Latest).unwrap();
        assert_eq!(req.params, json!(["localhost", "0x2162", "", "eth,net,web3"]));
    }

    #[test]
    fn test_index_defaults_to_zero_quantity() {
        let args = CallArgs::new().arg(json!("0xb903239f8543d04b5dc1ba6579132b143087c68d"));
        let req =
            build("eth_getTransactionByBlockHashAndIndex", args, BlockTag::Latest).unwrap();
        assert_eq!(
            req.params,
            json!(["0xb903239f8543d04b5dc1ba6579132b143087c68d", "0x0"])
        );
    }
}
