//! The `signer_*` namespace: the Parity trusted signer queue.
//!
//! Defined once, instantiated for both HTTP call strategies. Every
//! method binds the arguments the caller supplied and delegates
//! defaults to the request builder, so the parameter table stays the
//! single source of truth.

use crate::val;
use ethrpc_core::builder::CallArgs;
use ethrpc_core::params::{self, TransactionModification};

macro_rules! signer_methods {
    (($($async_:tt)?) ($($await_:tt)*) $client:ty, $resp:ty) => {
        impl $client {
            /// Returns an object containing the request confirmation status. Parity
            /// only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-signer-module#signer_confirmrequest>.
            pub $($async_)? fn signer_confirm_request(
                &self,
                request_id: u64,
                modification: Option<&TransactionModification>,
                password: &str,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(params::quantity(request_id))?);
                if let Some(modification) = modification {
                    args = args.kwarg("modification", val(modification)?);
                }
                // Bound by name: password sits after the optional
                // modification slot.
                args = args.kwarg("password", val(password)?);
                self.call("signer_confirmRequest", args)$($await_)*
            }

            /// Returns an object containing the request confirmation status. Parity
            /// only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-signer-module#signer_confirmrequestraw>.
            pub $($async_)? fn signer_confirm_request_raw(
                &self,
                request_id: u64,
                data: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(request_id))?)
                    .arg(val(data)?);
                self.call("signer_confirmRequestRaw", args)$($await_)*
            }

            /// Returns an object containing the request confirmation status. Parity
            /// only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-signer-module#signer_confirmrequestwithtoken>.
            pub $($async_)? fn signer_confirm_request_with_token(
                &self,
                request_id: u64,
                modification: Option<&TransactionModification>,
                password: &str,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(params::quantity(request_id))?);
                if let Some(modification) = modification {
                    args = args.kwarg("modification", val(modification)?);
                }
                // Bound by name: password sits after the optional
                // modification slot.
                args = args.kwarg("password", val(password)?);
                self.call("signer_confirmRequestWithToken", args)$($await_)*
            }

            /// Returns the newly created authorization token. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-signer-module#signer_generateauthorizationtoken>.
            pub $($async_)? fn signer_generate_authorization_token(&self) -> crate::Result<$resp> {
                self.call("signer_generateAuthorizationToken", CallArgs::new())$($await_)*
            }

            /// Returns the newly created web proxy token. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-signer-module#signer_generatewebproxyaccesstoken>.
            pub $($async_)? fn signer_generate_web_proxy_access_token(
                &self,
                domain: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(domain)?);
                self.call("signer_generateWebProxyAccessToken", args)$($await_)*
            }

            /// Returns if the request rejection was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-signer-module#signer_rejectrequest>.
            pub $($async_)? fn signer_reject_request(&self, request_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(request_id))?);
                self.call("signer_rejectRequest", args)$($await_)*
            }

            /// Returns a list of transactions pending authorization. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-signer-module#signer_requeststoconfirm>.
            pub $($async_)? fn signer_requests_to_confirm(&self) -> crate::Result<$resp> {
                self.call("signer_requestsToConfirm", CallArgs::new())$($await_)*
            }

            /// Returns a newly created subscription ID for pending transactions.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-signer-module#signer_subscribepending>.
            pub $($async_)? fn signer_subscribe_pending(&self) -> crate::Result<$resp> {
                self.call("signer_subscribePending", CallArgs::new())$($await_)*
            }

            /// Returns if the unsubscribe request was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-signer-module#signer_unsubscribepending>.
            pub $($async_)? fn signer_unsubscribe_pending(
                &self,
                subscription_id: u64,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(subscription_id))?);
                self.call("signer_unsubscribePending", args)$($await_)*
            }
        }
    };
}

signer_methods!(() () crate::Client, reqwest::blocking::Response);
signer_methods!((async) (.await) crate::AsyncClient, reqwest::Response);
