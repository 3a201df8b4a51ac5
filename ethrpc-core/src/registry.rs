//! Method registry for the Ethereum JSON-RPC API
//!
//! Every supported RPC method is described by a [`MethodSpec`]: a
//! snake_case alias, the camelCase wire name the node expects, the
//! fixed id constant, and an ordered list of wire parameters with
//! their defaults. The table is fixed at build time; lookups go through
//! a bidirectional index built once on first use.
//!
//! Name resolution accepts either spelling and is exact: no fuzzy
//! matching, no case folding. `eth_get_balance` and `eth_getBalance`
//! both resolve to the wire name `eth_getBalance`; anything else is an
//! [`Error::UnknownMethod`].
//!
//! # Examples
//!
//! ```rust
//! use ethrpc_core::registry;
//!
//! assert_eq!(registry::resolve("web3_client_version").unwrap(), "web3_clientVersion");
//! assert_eq!(registry::resolve("web3_clientVersion").unwrap(), "web3_clientVersion");
//! assert!(registry::resolve("web3_clientversion").is_err());
//! ```

mod table;

use crate::error::{Error, Result};
use crate::params::BlockTag;
use lazy_static::lazy_static;
use serde_json::json;
use std::collections::HashMap;

pub use table::METHODS;

/// Description of one supported RPC method.
#[derive(Debug)]
pub struct MethodSpec {
    /// snake_case alias
    pub name: &'static str,
    /// Canonical camelCase wire name
    pub rpc_name: &'static str,
    /// Fixed id constant sent by the HTTP transports
    pub id: i64,
    /// Wire parameters in declared order
    pub params: &'static [ParamSpec],
}

/// One wire parameter of a method.
#[derive(Debug)]
pub struct ParamSpec {
    /// Parameter name, used for keyword binding
    pub name: &'static str,
    /// Default applied when the caller does not bind the parameter
    pub default: ParamDefault,
}

impl ParamSpec {
    /// Whether the caller must supply this parameter.
    pub fn is_required(&self) -> bool {
        matches!(self.default, ParamDefault::Required)
    }
}

/// Default value of an unbound parameter.
///
/// The distinction between `Null` and `Absent` is part of the wire
/// contract: some methods expect a placeholder null for an omitted
/// trailing argument, others expect the argument to disappear from
/// `params` entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamDefault {
    /// No default; the caller must bind a value
    Required,
    /// Dropped from `params` when unbound (only ever in trailing position)
    Absent,
    /// Explicit JSON null
    Null,
    /// Boolean literal
    Bool(bool),
    /// Hex quantity, e.g. `0` serializes as `"0x0"`
    Quantity(u64),
    /// String literal
    Str(&'static str),
    /// Empty JSON object
    EmptyObject,
    /// Empty JSON array
    EmptyArray,
    /// The client's configured default block tag
    Block,
}

/// Result of materializing a default for an unbound parameter.
pub(crate) enum Materialized {
    /// The parameter was required; binding has failed
    Missing,
    /// The parameter is dropped from `params`
    Drop,
    /// The default value to append
    Value(serde_json::Value),
}

impl ParamDefault {
    pub(crate) fn materialize(&self, default_block: BlockTag) -> Materialized {
        match self {
            ParamDefault::Required => Materialized::Missing,
            ParamDefault::Absent => Materialized::Drop,
            ParamDefault::Null => Materialized::Value(serde_json::Value::Null),
            ParamDefault::Bool(b) => Materialized::Value(json!(b)),
            ParamDefault::Quantity(q) => Materialized::Value(json!(crate::params::quantity(*q))),
            ParamDefault::Str(s) => Materialized::Value(json!(s)),
            ParamDefault::EmptyObject => Materialized::Value(json!({})),
            ParamDefault::EmptyArray => Materialized::Value(json!([])),
            ParamDefault::Block => Materialized::Value(json!(default_block.as_str())),
        }
    }
}

lazy_static! {
    static ref INDEX: HashMap<&'static str, &'static MethodSpec> = {
        let mut index = HashMap::with_capacity(METHODS.len() * 2);
        for spec in METHODS {
            index.insert(spec.name, spec);
            index.insert(spec.rpc_name, spec);
        }
        index
    };
}

/// Look up a method by either spelling.
pub fn lookup(name: &str) -> Option<&'static MethodSpec> {
    INDEX.get(name).copied()
}

/// Resolve either spelling to the canonical wire name.
pub fn resolve(name: &str) -> Result<&'static str> {
    lookup(name)
        .map(|spec| spec.rpc_name)
        .ok_or_else(|| Error::UnknownMethod(name.to_string()))
}

/// Resolve either spelling to the snake_case alias.
pub fn snake_name(name: &str) -> Result<&'static str> {
    lookup(name)
        .map(|spec| spec.name)
        .ok_or_else(|| Error::UnknownMethod(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_both_spellings() {
        for spec in METHODS {
            assert_eq!(resolve(spec.name).unwrap(), spec.rpc_name);
            assert_eq!(resolve(spec.rpc_name).unwrap(), spec.rpc_name);
            assert_eq!(snake_name(spec.rpc_name).unwrap(), spec.name);
            assert_eq!(snake_name(spec.name).unwrap(), spec.name);
        }
    }

    #[test]
    fn test_name_pairs_are_a_bijection() {
        let mut snakes = HashSet::new();
        let mut wires = HashSet::new();
        for spec in METHODS {
            assert!(snakes.insert(spec.name), "duplicate alias {}", spec.name);
            assert!(wires.insert(spec.rpc_name), "duplicate wire name {}", spec.rpc_name);
        }
        // An alias may only collide with its own wire spelling.
        for spec in METHODS {
            if snakes.contains(spec.rpc_name) {
                assert_eq!(spec.name, spec.rpc_name);
            }
        }
    }

    #[test]
    fn test_unknown_method_is_distinguishable() {
        let err = resolve("eth_getBalnce").unwrap_err();
        assert!(matches!(err, Error::UnknownMethod(_)));
        assert!(resolve("ETH_GETBALANCE").is_err());
    }

    #[test]
    fn test_fixed_id_constants() {
        assert_eq!(lookup("web3_clientVersion").unwrap().id, 67);
        assert_eq!(lookup("eth_block_number").unwrap().id, 83);
        assert_eq!(lookup("net_peerCount").unwrap().id, 74);
        assert_eq!(lookup("eth_gasPrice").unwrap().id, 73);
        assert_eq!(lookup("eth_hashrate").unwrap().id, 71);
        assert_eq!(lookup("shh_version").unwrap().id, 67);
    }

    #[test]
    fn test_absent_defaults_only_trailing() {
        for spec in METHODS {
            for (i, param) in spec.params.iter().enumerate() {
                if matches!(param.default, ParamDefault::Absent) {
                    assert_eq!(
                        i,
                        spec.params.len() - 1,
                        "{}: absent default must be the last parameter",
                        spec.rpc_name
                    );
                }
            }
        }
    }

    #[test]
    fn test_table_size() {
        assert_eq!(METHODS.len(), 242);
    }
}
