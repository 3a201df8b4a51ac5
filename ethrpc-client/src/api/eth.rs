//! The `eth_*` namespace: accounts, blocks, transactions, logs,
//! filters, mining, and pub-sub.
//!
//! Defined once, instantiated for both HTTP call strategies. Every
//! method binds the arguments the caller supplied and delegates
//! defaults to the request builder, so the parameter table stays the
//! single source of truth.

use crate::val;
use ethrpc_core::builder::CallArgs;
use ethrpc_core::params::{self, BlockId, FilterOptions, SubscriptionKind, TransactionRequest};

macro_rules! eth_methods {
    (($($async_:tt)?) ($($await_:tt)*) $client:ty, $resp:ty) => {
        impl $client {
            /// Returns the list of addresses owned by the client.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_accounts>.
            pub $($async_)? fn eth_accounts(&self) -> crate::Result<$resp> {
                self.call("eth_accounts", CallArgs::new())$($await_)*
            }

            /// Returns the most recent block identifier.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_blocknumber>.
            pub $($async_)? fn eth_block_number(&self) -> crate::Result<$resp> {
                self.call("eth_blockNumber", CallArgs::new())$($await_)*
            }

            /// Execute new message immediately without creating a transaction.
            /// Returns the value of the executed contract. The block position
            /// must be provided; valid tags are {"earliest", "latest",
            /// "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_call>.
            pub $($async_)? fn eth_call(
                &self,
                transaction: &TransactionRequest,
                block: BlockId,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(transaction)?)
                    .arg(val(block)?);
                self.call("eth_call", args)$($await_)*
            }

            /// Returns the client coinbase address.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_coinbase>.
            pub $($async_)? fn eth_coinbase(&self) -> crate::Result<$resp> {
                self.call("eth_coinbase", CallArgs::new())$($await_)*
            }

            /// Returns the compiled source code. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_compilelll>.
            pub $($async_)? fn eth_compile_lll(&self, code: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(code)?);
                self.call("eth_compileLLL", args)$($await_)*
            }

            /// Returns the compiled source code. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_compileserpent>.
            pub $($async_)? fn eth_compile_serpent(&self, code: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(code)?);
                self.call("eth_compileSerpent", args)$($await_)*
            }

            /// Returns the compiled source code. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_compilesolidity>.
            pub $($async_)? fn eth_compile_solidity(&self, code: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(code)?);
                self.call("eth_compileSolidity", args)$($await_)*
            }

            /// Returns the estimated quantity of gas used.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_estimategas>.
            pub $($async_)? fn eth_estimate_gas(
                &self,
                transaction: &TransactionRequest,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(transaction)?);
                self.call("eth_estimateGas", args)$($await_)*
            }

            /// Returns the current gas price.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_gasprice>.
            pub $($async_)? fn eth_gas_price(&self) -> crate::Result<$resp> {
                self.call("eth_gasPrice", CallArgs::new())$($await_)*
            }

            /// Returns the balance of the address. Valid tags are {"earliest",
            /// "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getbalance>.
            pub $($async_)? fn eth_get_balance(
                &self,
                address: &str,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(address)?);
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("eth_getBalance", args)$($await_)*
            }

            /// Returns the information about blocks by hash.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getblockbyhash>.
            pub $($async_)? fn eth_get_block_by_hash(
                &self,
                hash: &str,
                use_full: Option<bool>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(hash)?);
                if let Some(use_full) = use_full {
                    args = args.kwarg("use_full", val(use_full)?);
                }
                self.call("eth_getBlockByHash", args)$($await_)*
            }

            /// Returns the information about blocks by number. Valid tags are
            /// {"earliest", "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getblockbynumber>.
            pub $($async_)? fn eth_get_block_by_number(
                &self,
                block: Option<BlockId>,
                use_full: Option<bool>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                if let Some(use_full) = use_full {
                    args = args.kwarg("use_full", val(use_full)?);
                }
                self.call("eth_getBlockByNumber", args)$($await_)*
            }

            /// Returns the number of transactions in block by block hash.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getblocktransactioncountbyhash>.
            pub $($async_)? fn eth_get_block_transaction_count_by_hash(
                &self,
                hash: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(hash)?);
                self.call("eth_getBlockTransactionCountByHash", args)$($await_)*
            }

            /// Returns the number of transactions in block by block number. Valid
            /// tags are {"earliest", "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getblocktransactioncountbynumber>.
            pub $($async_)? fn eth_get_block_transaction_count_by_number(
                &self,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("eth_getBlockTransactionCountByNumber", args)$($await_)*
            }

            /// Returns the code at a given address. Valid tags are {"earliest",
            /// "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getcode>.
            pub $($async_)? fn eth_get_code(
                &self,
                address: &str,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(address)?);
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("eth_getCode", args)$($await_)*
            }

            /// Returns a list of available compilers. Ethereum only.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getcompilers>.
            pub $($async_)? fn eth_get_compilers(&self) -> crate::Result<$resp> {
                self.call("eth_getCompilers", CallArgs::new())$($await_)*
            }

            /// Returns a list of logs since the last poll.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getfilterchanges>.
            pub $($async_)? fn eth_get_filter_changes(&self, filter_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(filter_id))?);
                self.call("eth_getFilterChanges", args)$($await_)*
            }

            /// Returns an array of all filter logs for ID.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getfilterlogs>.
            pub $($async_)? fn eth_get_filter_logs(&self, filter_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(filter_id))?);
                self.call("eth_getFilterLogs", args)$($await_)*
            }

            /// Returns an array of logs matching a filter. Valid tags for
            /// `from_block` and `to_block` are {"earliest", "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getlogs>.
            pub $($async_)? fn eth_get_logs(&self, filter: &FilterOptions) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(filter)?);
                self.call("eth_getLogs", args)$($await_)*
            }

            /// Returns the value from storage position of the address. Valid tags
            /// are {"earliest", "latest", "pending"}. For a mapping member the
            /// position is `keccak256(pad32(key) ++ pad32(slot))`, which the
            /// caller computes.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getstorageat>.
            pub $($async_)? fn eth_get_storage_at(
                &self,
                address: &str,
                position: u64,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(params::quantity(position))?);
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("eth_getStorageAt", args)$($await_)*
            }

            /// Returns the information about transactions by block hash and
            /// transaction index.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_gettransactionbyblockhashandindex>.
            pub $($async_)? fn eth_get_transaction_by_block_hash_and_index(
                &self,
                hash: &str,
                index: Option<u64>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(hash)?);
                if let Some(index) = index {
                    args = args.kwarg("index", val(params::quantity(index))?);
                }
                self.call("eth_getTransactionByBlockHashAndIndex", args)$($await_)*
            }

            /// Returns the information about transactions by block number and
            /// transaction index. Valid tags are {"earliest", "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_gettransactionbyblocknumberandindex>.
            pub $($async_)? fn eth_get_transaction_by_block_number_and_index(
                &self,
                block: Option<BlockId>,
                index: Option<u64>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                if let Some(index) = index {
                    args = args.kwarg("index", val(params::quantity(index))?);
                }
                self.call("eth_getTransactionByBlockNumberAndIndex", args)$($await_)*
            }

            /// Returns the information about transactions by hash.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_gettransactionbyhash>.
            pub $($async_)? fn eth_get_transaction_by_hash(&self, hash: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(hash)?);
                self.call("eth_getTransactionByHash", args)$($await_)*
            }

            /// Returns the number of transactions sent from address. Valid tags are
            /// {"earliest", "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_gettransactioncount>.
            pub $($async_)? fn eth_get_transaction_count(
                &self,
                address: &str,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(address)?);
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("eth_getTransactionCount", args)$($await_)*
            }

            /// Returns the receipt about a transaction by hash.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_gettransactionreceipt>.
            pub $($async_)? fn eth_get_transaction_receipt(&self, hash: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(hash)?);
                self.call("eth_getTransactionReceipt", args)$($await_)*
            }

            /// Returns information about an uncle by block hash and by uncle index.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getunclebyblockhashandindex>.
            pub $($async_)? fn eth_get_uncle_by_block_hash_and_index(
                &self,
                hash: &str,
                index: Option<u64>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(hash)?);
                if let Some(index) = index {
                    args = args.kwarg("index", val(params::quantity(index))?);
                }
                self.call("eth_getUncleByBlockHashAndIndex", args)$($await_)*
            }

            /// Returns information about an uncle by block number and by uncle
            /// index. Valid tags are {"earliest", "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getunclebyblocknumberandindex>.
            pub $($async_)? fn eth_get_uncle_by_block_number_and_index(
                &self,
                block: Option<BlockId>,
                index: Option<u64>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                if let Some(index) = index {
                    args = args.kwarg("index", val(params::quantity(index))?);
                }
                self.call("eth_getUncleByBlockNumberAndIndex", args)$($await_)*
            }

            /// Returns the number of uncles in block by block hash.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getunclecountbyblockhash>.
            pub $($async_)? fn eth_get_uncle_count_by_block_hash(
                &self,
                hash: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(hash)?);
                self.call("eth_getUncleCountByBlockHash", args)$($await_)*
            }

            /// Returns the number of uncles in block by block number. Valid tags
            /// are {"earliest", "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getunclecountbyblocknumber>.
            pub $($async_)? fn eth_get_uncle_count_by_block_number(
                &self,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("eth_getUncleCountByBlockNumber", args)$($await_)*
            }

            /// Returns data about the current block, seed hash, and boundary
            /// condition.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getwork>.
            pub $($async_)? fn eth_get_work(&self) -> crate::Result<$resp> {
                self.call("eth_getWork", CallArgs::new())$($await_)*
            }

            /// Returns the number of hashes per second the node is mining.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_hashrate>.
            pub $($async_)? fn eth_hashrate(&self) -> crate::Result<$resp> {
                self.call("eth_hashrate", CallArgs::new())$($await_)*
            }

            /// Returns boolean data if the node is mining.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_mining>.
            pub $($async_)? fn eth_mining(&self) -> crate::Result<$resp> {
                self.call("eth_mining", CallArgs::new())$($await_)*
            }

            /// Returns the filter ID.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_newblockfilter>.
            pub $($async_)? fn eth_new_block_filter(&self) -> crate::Result<$resp> {
                self.call("eth_newBlockFilter", CallArgs::new())$($await_)*
            }

            /// Returns the filter ID. Valid tags for `from_block` and `to_block`
            /// are {"earliest", "latest", "pending"}.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_newfilter>.
            pub $($async_)? fn eth_new_filter(&self, filter: &FilterOptions) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(filter)?);
                self.call("eth_newFilter", args)$($await_)*
            }

            /// Returns the filter ID.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_newpendingtransactionfilter>.
            pub $($async_)? fn eth_new_pending_transaction_filter(&self) -> crate::Result<$resp> {
                self.call("eth_newPendingTransactionFilter", CallArgs::new())$($await_)*
            }

            /// Returns the current Ethereum protocol version.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_protocolversion>.
            pub $($async_)? fn eth_protocol_version(&self) -> crate::Result<$resp> {
                self.call("eth_protocolVersion", CallArgs::new())$($await_)*
            }

            /// Returns the transaction hash, or the zero hash if the transaction is
            /// not available yet.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_sendrawtransaction>.
            pub $($async_)? fn eth_send_raw_transaction(&self, data: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(data)?);
                self.call("eth_sendRawTransaction", args)$($await_)*
            }

            /// Returns the transaction hash, or the zero hash if the transaction is
            /// not available yet.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_sendtransaction>.
            pub $($async_)? fn eth_send_transaction(
                &self,
                transaction: &TransactionRequest,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(transaction)?);
                self.call("eth_sendTransaction", args)$($await_)*
            }

            /// Returns the Ethereum-signed message.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_sign>.
            pub $($async_)? fn eth_sign(&self, address: &str, message: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(message)?);
                self.call("eth_sign", args)$($await_)*
            }

            /// Returns the signed transaction data and object, for submission with
            /// `eth_send_raw_transaction`. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-eth-module#eth_signtransaction>.
            pub $($async_)? fn eth_sign_transaction(
                &self,
                transaction: &TransactionRequest,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(transaction)?);
                self.call("eth_signTransaction", args)$($await_)*
            }

            /// Returns a boolean if the submission went through.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_submithashrate>.
            pub $($async_)? fn eth_submit_hashrate(
                &self,
                hashrate: u64,
                client_id: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::hashrate(hashrate))?)
                    .arg(val(client_id)?);
                self.call("eth_submitHashrate", args)$($await_)*
            }

            /// Returns a boolean if the proof of work is valid.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_submitwork>.
            pub $($async_)? fn eth_submit_work(
                &self,
                nonce: u64,
                pow_hash: &str,
                mix_digest: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::work_nonce(nonce))?)
                    .arg(val(pow_hash)?)
                    .arg(val(mix_digest)?);
                self.call("eth_submitWork", args)$($await_)*
            }

            /// Returns data about the sync status.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_syncing>.
            pub $($async_)? fn eth_syncing(&self) -> crate::Result<$resp> {
                self.call("eth_syncing", CallArgs::new())$($await_)*
            }

            /// Returns a boolean for if the filter was uninstalled.
            ///
            /// See <https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_uninstallfilter>.
            pub $($async_)? fn eth_uninstall_filter(&self, filter_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(filter_id))?);
                self.call("eth_uninstallFilter", args)$($await_)*
            }

            /// Returns a subscription ID. Valid tags for `from_block` and
            /// `to_block` are {"earliest", "latest", "pending"}. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-Eth-Pub-Sub-Module#eth_subscribe>.
            pub $($async_)? fn eth_subscribe(
                &self,
                kind: SubscriptionKind,
                filter: Option<&FilterOptions>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(kind)?);
                if let Some(filter) = filter {
                    args = args.kwarg("filter", val(filter)?);
                }
                self.call("eth_subscribe", args)$($await_)*
            }

            /// Returns if the unsubscribe request was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-Eth-Pub-Sub-Module#eth_unsubscribe>.
            pub $($async_)? fn eth_unsubscribe(&self, subscription_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(subscription_id))?);
                self.call("eth_unsubscribe", args)$($await_)*
            }
        }
    };
}

eth_methods!(() () crate::Client, reqwest::blocking::Response);
eth_methods!((async) (.await) crate::AsyncClient, reqwest::Response);
