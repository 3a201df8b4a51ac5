//! The `trace_*` namespace: Parity transaction tracing.
//!
//! Defined once, instantiated for both HTTP call strategies. Every
//! method binds the arguments the caller supplied and delegates
//! defaults to the request builder, so the parameter table stays the
//! single source of truth.

use crate::val;
use ethrpc_core::builder::CallArgs;
use ethrpc_core::params::{self, BlockId, FilterOptions, TraceType, TransactionRequest};

macro_rules! trace_methods {
    (($($async_:tt)?) ($($await_:tt)*) $client:ty, $resp:ty) => {
        impl $client {
            /// Returns a list of traces created at block. Valid tags are
            /// {"earliest", "latest", "pending"}. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-trace-module#trace_block>.
            pub $($async_)? fn trace_block(&self, block: Option<BlockId>) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("trace_block", args)$($await_)*
            }

            /// Execute new call and return response body containing a list of
            /// traces to the call. The block position must be provided; valid
            /// tags are {"earliest", "latest", "pending"}. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-trace-module#trace_call>.
            pub $($async_)? fn trace_call(
                &self,
                transaction: &TransactionRequest,
                block: BlockId,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(transaction)?)
                    .arg(val(block)?);
                self.call("trace_call", args)$($await_)*
            }

            /// Returns a list of traces matching a filter. Valid tags for
            /// `from_block` and `to_block` are {"earliest", "latest", "pending"}.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-trace-module#trace_filter>.
            pub $($async_)? fn trace_filter(&self, filter: &FilterOptions) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(filter)?);
                self.call("trace_filter", args)$($await_)*
            }

            /// Returns trace at position. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-trace-module#trace_get>.
            pub $($async_)? fn trace_get(
                &self,
                hash: &str,
                index: Option<u64>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(hash)?);
                if let Some(index) = index {
                    args = args.kwarg("index", val(params::quantity(index))?);
                }
                self.call("trace_get", args)$($await_)*
            }

            /// Returns traces to `eth_sendRawTransaction` without executing
            /// transaction. Valid trace types are {"vmTrace", "trace",
            /// "stateDiff"}. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-trace-module#trace_rawtransaction>.
            pub $($async_)? fn trace_raw_transaction(
                &self,
                data: &str,
                trace_types: &[TraceType],
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(data)?)
                    .arg(val(trace_types)?);
                self.call("trace_RawTransaction", args)$($await_)*
            }

            /// Returns list of traces to the replayed transaction. Valid trace
            /// types are {"vmTrace", "trace", "stateDiff"}. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-trace-module#trace_replaytransaction>.
            pub $($async_)? fn trace_replay_transaction(
                &self,
                hash: &str,
                trace_types: &[TraceType],
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(hash)?)
                    .arg(val(trace_types)?);
                self.call("trace_replayTransaction", args)$($await_)*
            }

            /// Returns list of traces to transaction by hash. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-trace-module#trace_transaction>.
            pub $($async_)? fn trace_transaction(&self, hash: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(hash)?);
                self.call("trace_transaction", args)$($await_)*
            }
        }
    };
}

trace_methods!(() () crate::Client, reqwest::blocking::Response);
trace_methods!((async) (.await) crate::AsyncClient, reqwest::Response);
