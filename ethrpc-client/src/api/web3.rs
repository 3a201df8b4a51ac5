//! The `web3_*` and `net_*` namespaces: client version, sha3,
//! and network status.
//!
//! Defined once, instantiated for both HTTP call strategies. Every
//! method binds the arguments the caller supplied and delegates
//! defaults to the request builder, so the parameter table stays the
//! single source of truth.

use crate::val;
use ethrpc_core::builder::CallArgs;

macro_rules! web3_methods {
    (($($async_:tt)?) ($($await_:tt)*) $client:ty, $resp:ty) => {
        impl $client {
            /// Returns the JSON-formatted client version string for the Ethereum
            /// RPC.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#web3_clientversion>.
            pub $($async_)? fn web3_client_version(&self) -> crate::Result<$resp> {
                self.call("web3_clientVersion", CallArgs::new())$($await_)*
            }

            /// Returns the Keccak-256 hash of the string parameter.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#web3_sha3>.
            pub $($async_)? fn web3_sha3(&self, data: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(data)?);
                self.call("web3_sha3", args)$($await_)*
            }

            /// Returns if the client is actively listening for connections.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#net_listening>.
            pub $($async_)? fn net_listening(&self) -> crate::Result<$resp> {
                self.call("net_listening", CallArgs::new())$($await_)*
            }

            /// Returns the number of peers connected to the client.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#net_peercount>.
            pub $($async_)? fn net_peer_count(&self) -> crate::Result<$resp> {
                self.call("net_peerCount", CallArgs::new())$($await_)*
            }

            /// Returns the network ID.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#net_version>.
            pub $($async_)? fn net_version(&self) -> crate::Result<$resp> {
                self.call("net_version", CallArgs::new())$($await_)*
            }
        }
    };
}

web3_methods!(() () crate::Client, reqwest::blocking::Response);
web3_methods!((async) (.await) crate::AsyncClient, reqwest::Response);
