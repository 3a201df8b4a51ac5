//! The `personal_*` namespace: account management on the node
//! (Parity/Geth).
//!
//! Defined once, instantiated for both HTTP call strategies. Every
//! method binds the arguments the caller supplied and delegates
//! defaults to the request builder, so the parameter table stays the
//! single source of truth.

use crate::val;
use ethrpc_core::builder::CallArgs;
use ethrpc_core::params::{self, TransactionRequest};

macro_rules! personal_methods {
    (($($async_:tt)?) ($($await_:tt)*) $client:ty, $resp:ty) => {
        impl $client {
            /// Returns the address used to sign message. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#personal_ecrecover>.
            pub $($async_)? fn personal_ec_recover(
                &self,
                message: &str,
                signature: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(message)?)
                    .arg(val(signature)?);
                self.call("personal_ecRecover", args)$($await_)*
            }

            /// Returns the address of the new account. Parity/Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#personal_importrawkey>.
            pub $($async_)? fn personal_import_raw_key(
                &self,
                private_key: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(private_key)?)
                    .arg(val(password)?);
                self.call("personal_importRawKey", args)$($await_)*
            }

            /// Returns a list of all locally-stored account addresses. Parity or
            /// Geth only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-personal-module#personal_listaccounts>.
            pub $($async_)? fn personal_list_accounts(&self) -> crate::Result<$resp> {
                self.call("personal_listAccounts", CallArgs::new())$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#personal_lockaccount>.
            pub $($async_)? fn personal_lock_account(&self, address: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?);
                self.call("personal_lockAccount", args)$($await_)*
            }

            /// Returns the new account address. Parity/Geth only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-personal-module#personal_newaccount>.
            pub $($async_)? fn personal_new_account(&self, password: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(password)?);
                self.call("personal_newAccount", args)$($await_)*
            }

            /// Returns the transaction hash, or the zero hash if the transaction is
            /// not available yet. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-personal-module#personal_sendtransaction>.
            pub $($async_)? fn personal_send_transaction(
                &self,
                transaction: &TransactionRequest,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(transaction)?)
                    .arg(val(password)?);
                self.call("personal_sendTransaction", args)$($await_)*
            }

            /// Returns the signed message. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#personal_sign>.
            pub $($async_)? fn personal_sign(
                &self,
                message: &str,
                address: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(message)?)
                    .arg(val(address)?)
                    .arg(val(password)?);
                self.call("personal_sign", args)$($await_)*
            }

            /// Returns a boolean if the account was unlocked. Parity/Geth only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-personal-module#personal_unlockaccount>.
            pub $($async_)? fn personal_unlock_account(
                &self,
                address: &str,
                password: &str,
                duration: Option<u64>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(password)?);
                if let Some(duration) = duration {
                    args = args.kwarg("duration", val(params::quantity(duration))?);
                }
                self.call("personal_unlockAccount", args)$($await_)*
            }
        }
    };
}

personal_methods!(() () crate::Client, reqwest::blocking::Response);
personal_methods!((async) (.await) crate::AsyncClient, reqwest::Response);
