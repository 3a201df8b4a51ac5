//! The `shh_*` namespace: Whisper identities, filters, and
//! messages.
//!
//! Defined once, instantiated for both HTTP call strategies. Every
//! method binds the arguments the caller supplied and delegates
//! defaults to the request builder, so the parameter table stays the
//! single source of truth.

use crate::val;
use ethrpc_core::builder::CallArgs;
use ethrpc_core::params::{self, MessageFilter, WhisperFilter, WhisperPost};

macro_rules! shh_methods {
    (($($async_:tt)?) ($($await_:tt)*) $client:ty, $resp:ty) => {
        impl $client {
            /// Returns an identity for the private key. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_addprivatekey>.
            pub $($async_)? fn shh_add_private_key(&self, private_key: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(private_key)?);
                self.call("shh_addPrivateKey", args)$($await_)*
            }

            /// Returns an identity for the symmetric key. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_addsymkey>.
            pub $($async_)? fn shh_add_sym_key(&self, sym_key: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(sym_key)?);
                self.call("shh_addSymKey", args)$($await_)*
            }

            /// Returns a boolean if the identity was successfully added to the
            /// group. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_addtogroup>.
            pub $($async_)? fn shh_add_to_group(&self, address: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?);
                self.call("shh_addToGroup", args)$($await_)*
            }

            /// Returns a boolean if the key was successfully deleted. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_deletekey>.
            pub $($async_)? fn shh_delete_key(&self, key_id: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(key_id)?);
                self.call("shh_deleteKey", args)$($await_)*
            }

            /// Returns a boolean if the message filter was successfully deleted.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_deletemessagefilter>.
            pub $($async_)? fn shh_delete_message_filter(
                &self,
                filter_id: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(filter_id)?);
                self.call("shh_deleteMessageFilter", args)$($await_)*
            }

            /// Returns a list of messages matching the filter since last poll.
            /// Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_getfilterchanges>.
            pub $($async_)? fn shh_get_filter_changes(&self, filter_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(filter_id))?);
                self.call("shh_getFilterChanges", args)$($await_)*
            }

            /// Returns a list of messages matching the filter since last poll.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_getfiltermessages>.
            pub $($async_)? fn shh_get_filter_messages(&self, filter_id: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(filter_id)?);
                self.call("shh_getFilterMessages", args)$($await_)*
            }

            /// Returns a list of messages matching the filter. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_getmessages>.
            pub $($async_)? fn shh_get_messages(&self, filter_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(filter_id))?);
                self.call("shh_getMessages", args)$($await_)*
            }

            /// Returns the private key by identity. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_getprivatekey>.
            pub $($async_)? fn shh_get_private_key(&self, key_id: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(key_id)?);
                self.call("shh_getPrivateKey", args)$($await_)*
            }

            /// Returns the public key by identity. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_getpublickey>.
            pub $($async_)? fn shh_get_public_key(&self, key_id: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(key_id)?);
                self.call("shh_getPublicKey", args)$($await_)*
            }

            /// Returns the symmetric key by identity. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_getsymkey>.
            pub $($async_)? fn shh_get_sym_key(&self, key_id: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(key_id)?);
                self.call("shh_getSymKey", args)$($await_)*
            }

            /// Returns a boolean if the client holds the private keys to the
            /// identity. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_hasidentity>.
            pub $($async_)? fn shh_has_identity(&self, address: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?);
                self.call("shh_hasIdentity", args)$($await_)*
            }

            /// Returns info about the whisper node. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_info>.
            pub $($async_)? fn shh_info(&self) -> crate::Result<$resp> {
                self.call("shh_info", CallArgs::new())$($await_)*
            }

            /// Returns an identifier to the created filter. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_newfilter>.
            pub $($async_)? fn shh_new_filter(&self, filter: &WhisperFilter) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(filter)?);
                self.call("shh_newFilter", args)$($await_)*
            }

            /// Returns an address to the new group. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_newgroup>.
            pub $($async_)? fn shh_new_group(&self) -> crate::Result<$resp> {
                self.call("shh_newGroup", CallArgs::new())$($await_)*
            }

            /// Returns a newly created SSH identifier. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_newidentity>.
            pub $($async_)? fn shh_new_identity(&self) -> crate::Result<$resp> {
                self.call("shh_newIdentity", CallArgs::new())$($await_)*
            }

            /// Returns an identity to the newly created public/ private key pair.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_newkeypair>.
            pub $($async_)? fn shh_new_key_pair(&self) -> crate::Result<$resp> {
                self.call("shh_newKeyPair", CallArgs::new())$($await_)*
            }

            /// Returns a newly created filter ID. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_newmessagefilter>.
            pub $($async_)? fn shh_new_message_filter(
                &self,
                filter: &MessageFilter,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(filter)?);
                self.call("shh_newMessageFilter", args)$($await_)*
            }

            /// Returns an identity to the newly created symmetric key. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_newsymkey>.
            pub $($async_)? fn shh_new_sym_key(&self) -> crate::Result<$resp> {
                self.call("shh_newSymKey", CallArgs::new())$($await_)*
            }

            /// Returns a boolean if the message was sent.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_post>.
            pub $($async_)? fn shh_post(&self, message: &WhisperPost) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(message)?);
                self.call("shh_post", args)$($await_)*
            }

            /// Returns a subscription ID. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_subscribe>.
            pub $($async_)? fn shh_subscribe(&self, filter: &MessageFilter) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(filter)?);
                self.call("shh_subscribe", args)$($await_)*
            }

            /// Returns a boolean if the filter was successfully uninstalled.
            /// Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_uninstallfilter>.
            pub $($async_)? fn shh_uninstall_filter(&self, filter_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(filter_id))?);
                self.call("shh_uninstallFilter", args)$($await_)*
            }

            /// Returns if the unsubscribe request was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-shh-Module#shh_unsubscribe>.
            pub $($async_)? fn shh_unsubscribe(&self, subscription_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(subscription_id))?);
                self.call("shh_unsubscribe", args)$($await_)*
            }

            /// Returns the whisper protocol version. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#shh_version>.
            pub $($async_)? fn shh_version(&self) -> crate::Result<$resp> {
                self.call("shh_version", CallArgs::new())$($await_)*
            }
        }
    };
}

shh_methods!(() () crate::Client, reqwest::blocking::Response);
shh_methods!((async) (.await) crate::AsyncClient, reqwest::Response);
