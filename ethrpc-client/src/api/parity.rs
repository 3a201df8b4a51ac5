//! The `parity_*` namespace: Parity-specific node, account,
//! vault, and pub-sub methods.
//!
//! Defined once, instantiated for both HTTP call strategies. Every
//! method binds the arguments the caller supplied and delegates
//! defaults to the request builder, so the parameter table stays the
//! single source of truth.

use crate::val;
use ethrpc_core::{builder::{self, CallArgs}, registry, Error};
use ethrpc_core::params::{self, BlockId, Derivation, DerivationStep, TransactionRequest};

macro_rules! parity_methods {
    (($($async_:tt)?) ($($await_:tt)*) $client:ty, $resp:ty) => {
        impl $client {
            /// Returns metadata about accounts. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_accountsinfo>.
            pub $($async_)? fn parity_accounts_info(&self) -> crate::Result<$resp> {
                self.call("parity_accountsInfo", CallArgs::new())$($await_)*
            }

            /// Returns name of connected chain. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_chain>.
            pub $($async_)? fn parity_chain(&self) -> crate::Result<$resp> {
                self.call("parity_chain", CallArgs::new())$($await_)*
            }

            /// Returns status of connected chain. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_chainstatus>.
            pub $($async_)? fn parity_chain_status(&self) -> crate::Result<$resp> {
                self.call("parity_chainStatus", CallArgs::new())$($await_)*
            }

            /// Returns if the vault change was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_changevault>.
            pub $($async_)? fn parity_change_vault(
                &self,
                address: &str,
                vault: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(vault)?);
                self.call("parity_changeVault", args)$($await_)*
            }

            /// Returns if the password change was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_changevaultpassword>.
            pub $($async_)? fn parity_change_vault_password(
                &self,
                vault: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(vault)?)
                    .arg(val(password)?);
                self.call("parity_changeVaultPassword", args)$($await_)*
            }

            /// Returns the transaction hash if request was accepted, or an error.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_checkrequest>.
            pub $($async_)? fn parity_check_request(&self, request_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(request_id))?);
                self.call("parity_checkRequest", args)$($await_)*
            }

            /// Returns the base58-encoded v0 IPFS (InterPlanetary File System)
            /// content ID from a Protobuf-encoded data.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_cidv0>.
            pub $($async_)? fn parity_cid_v0(&self, data: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(data)?);
                self.call("parity_cidV0", args)$($await_)*
            }

            /// Returns if the vault closure was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_closevault>.
            pub $($async_)? fn parity_close_vault(&self, vault: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(vault)?);
                self.call("parity_closeVault", args)$($await_)*
            }

            /// Returns the unsigned transaction object created from partial data,
            /// which may be signed externally. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_composetransaction>.
            pub $($async_)? fn parity_compose_transaction(
                &self,
                transaction: &TransactionRequest,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(transaction)?);
                self.call("parity_composeTransaction", args)$($await_)*
            }

            /// Returns the information on the current consensus capability. Parity
            /// only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_consensuscapability>.
            pub $($async_)? fn parity_consensus_capability(&self) -> crate::Result<$resp> {
                self.call("parity_consensusCapability", CallArgs::new())$($await_)*
            }

            /// Returns hostname and port of dapps server. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_dappsurl>.
            pub $($async_)? fn parity_dapps_url(&self) -> crate::Result<$resp> {
                self.call("parity_dappsUrl", CallArgs::new())$($await_)*
            }

            /// Returns the decrypted message. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_decryptmessage>.
            pub $($async_)? fn parity_decrypt_message(
                &self,
                address: &str,
                message: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(message)?);
                self.call("parity_decryptMessage", args)$($await_)*
            }

            /// Returns default account address for transactions. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_defaultaccount>.
            pub $($async_)? fn parity_default_account(&self) -> crate::Result<$resp> {
                self.call("parity_defaultAccount", CallArgs::new())$($await_)*
            }

            /// Returns default extra data. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_defaultextradata>.
            pub $($async_)? fn parity_default_extra_data(&self) -> crate::Result<$resp> {
                self.call("parity_defaultExtraData", CallArgs::new())$($await_)*
            }

            /// Returns a list of recent stdout logs. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_devlogs>.
            pub $($async_)? fn parity_dev_logs(&self) -> crate::Result<$resp> {
                self.call("parity_devLogs", CallArgs::new())$($await_)*
            }

            /// Returns a string about the current logging level. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_devlogslevels>.
            pub $($async_)? fn parity_dev_logs_levels(&self) -> crate::Result<$resp> {
                self.call("parity_devLogsLevels", CallArgs::new())$($await_)*
            }

            /// Returns the decrypted message. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_encryptmessage>.
            pub $($async_)? fn parity_encrypt_message(
                &self,
                hash: &str,
                message: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(hash)?)
                    .arg(val(message)?);
                self.call("parity_encryptMessage", args)$($await_)*
            }

            /// Returns the enode URI. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_enode>.
            pub $($async_)? fn parity_enode(&self) -> crate::Result<$resp> {
                self.call("parity_enode", CallArgs::new())$($await_)*
            }

            /// Returns the currently set extra data. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_extradata>.
            pub $($async_)? fn parity_extra_data(&self) -> crate::Result<$resp> {
                self.call("parity_extraData", CallArgs::new())$($await_)*
            }

            /// Returns list of all future transactions currently in queue. Parity
            /// only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_futuretransactions>.
            pub $($async_)? fn parity_future_transactions(&self) -> crate::Result<$resp> {
                self.call("parity_futureTransactions", CallArgs::new())$($await_)*
            }

            /// Returns the current gas ceiling target. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_gasceiltarget>.
            pub $($async_)? fn parity_gas_ceil_target(&self) -> crate::Result<$resp> {
                self.call("parity_gasCeilTarget", CallArgs::new())$($await_)*
            }

            /// Returns the current gas floor target. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_gasfloortarget>.
            pub $($async_)? fn parity_gas_floor_target(&self) -> crate::Result<$resp> {
                self.call("parity_gasFloorTarget", CallArgs::new())$($await_)*
            }

            /// Returns historic gas prices. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_gaspricehistogram>.
            pub $($async_)? fn parity_gas_price_histogram(&self) -> crate::Result<$resp> {
                self.call("parity_gasPriceHistogram", CallArgs::new())$($await_)*
            }

            /// Returns the secret phrase now associated with account. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_generatesecretphrase>.
            pub $($async_)? fn parity_generate_secret_phrase(&self) -> crate::Result<$resp> {
                self.call("parity_generateSecretPhrase", CallArgs::new())$($await_)*
            }

            /// Returns the block header by number. Valid tags are {"earliest",
            /// "latest", "pending"}. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_getblockheaderbynumber>.
            pub $($async_)? fn parity_get_block_header_by_number(
                &self,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("parity_getBlockHeaderByNumber", args)$($await_)*
            }

            /// Returns metadata for vault. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_getvaultmeta>.
            pub $($async_)? fn parity_get_vault_meta(&self, vault: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(vault)?);
                self.call("parity_getVaultMeta", args)$($await_)*
            }

            /// Returns metadata for attached hardware wallets. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_hardwareaccountsinfo>.
            pub $($async_)? fn parity_hardware_accounts_info(&self) -> crate::Result<$resp> {
                self.call("parity_hardwareAccountsInfo", CallArgs::new())$($await_)*
            }

            /// Returns a list of addresses, or null. FatDB must be enabled (`--fat-
            /// db`). Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_listaccounts>.
            pub $($async_)? fn parity_list_accounts(
                &self,
                count: u64,
                offset: Option<&str>,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(params::quantity(count))?);
                if let Some(offset) = offset {
                    args = args.kwarg("offset", val(offset)?);
                }
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("parity_listAccounts", args)$($await_)*
            }

            /// Returns a list of opened vaults. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_listopenedvaults>.
            pub $($async_)? fn parity_list_opened_vaults(&self) -> crate::Result<$resp> {
                self.call("parity_listOpenedVaults", CallArgs::new())$($await_)*
            }

            /// Returns a list of storage keys from account. FatDB must be enabled
            /// (`--fat-db`). Valid tags are {"earliest", "latest", "pending"}.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_liststoragekeys>.
            pub $($async_)? fn parity_list_storage_keys(
                &self,
                address: &str,
                count: u64,
                offset: Option<&str>,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(params::quantity(count))?);
                if let Some(offset) = offset {
                    args = args.kwarg("offset", val(offset)?);
                }
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("parity_listStorageKeys", args)$($await_)*
            }

            /// Returns a list of vaults. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_listvaults>.
            pub $($async_)? fn parity_list_vaults(&self) -> crate::Result<$resp> {
                self.call("parity_listVaults", CallArgs::new())$($await_)*
            }

            /// Returns a list of current and previous local transactions. Parity
            /// only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_localtransactions>.
            pub $($async_)? fn parity_local_transactions(&self) -> crate::Result<$resp> {
                self.call("parity_localTransactions", CallArgs::new())$($await_)*
            }

            /// Returns the current minimal gas price. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_mingasprice>.
            pub $($async_)? fn parity_min_gas_price(&self) -> crate::Result<$resp> {
                self.call("parity_minGasPrice", CallArgs::new())$($await_)*
            }

            /// Returns the mode. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_mode>.
            pub $($async_)? fn parity_mode(&self) -> crate::Result<$resp> {
                self.call("parity_mode", CallArgs::new())$($await_)*
            }

            /// Returns if a new vault was created. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_newvault>.
            pub $($async_)? fn parity_new_vault(
                &self,
                vault: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(vault)?)
                    .arg(val(password)?);
                self.call("parity_newVault", args)$($await_)*
            }

            /// Returns name of connected chain. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_netchain>.
            pub $($async_)? fn parity_net_chain(&self) -> crate::Result<$resp> {
                self.call("parity_netChain", CallArgs::new())$($await_)*
            }

            /// Returns the number of connected peers. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_netpeers>.
            pub $($async_)? fn parity_net_peers(&self) -> crate::Result<$resp> {
                self.call("parity_netPeers", CallArgs::new())$($await_)*
            }

            /// Returns the network port node is listening to. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_netport>.
            pub $($async_)? fn parity_net_port(&self) -> crate::Result<$resp> {
                self.call("parity_netPort", CallArgs::new())$($await_)*
            }

            /// Returns the valid transaction nonce from account. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_nextnonce>.
            pub $($async_)? fn parity_next_nonce(&self, address: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?);
                self.call("parity_nextNonce", args)$($await_)*
            }

            /// Returns the node kind and availability. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_nodekind>.
            pub $($async_)? fn parity_node_kind(&self) -> crate::Result<$resp> {
                self.call("parity_nodeKind", CallArgs::new())$($await_)*
            }

            /// Returns the node name. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_nodename>.
            pub $($async_)? fn parity_node_name(&self) -> crate::Result<$resp> {
                self.call("parity_nodeName", CallArgs::new())$($await_)*
            }

            /// Returns a list of pending transactions. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_pendingtransactions>.
            pub $($async_)? fn parity_pending_transactions(&self) -> crate::Result<$resp> {
                self.call("parity_pendingTransactions", CallArgs::new())$($await_)*
            }

            /// Returns a map of pending transaction hashes to stats. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_pendingtransactionsstats>.
            pub $($async_)? fn parity_pending_transactions_stats(&self) -> crate::Result<$resp> {
                self.call("parity_pendingTransactionsStats", CallArgs::new())$($await_)*
            }

            /// Returns the account address from a secret phrase. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_phrasetoaddress>.
            pub $($async_)? fn parity_phrase_to_address(&self, phrase: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(phrase)?);
                self.call("parity_phraseToAddress", args)$($await_)*
            }

            /// Returns if the vault was successfully opened. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_openvault>.
            pub $($async_)? fn parity_open_vault(
                &self,
                vault: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(vault)?)
                    .arg(val(password)?);
                self.call("parity_openVault", args)$($await_)*
            }

            /// Returns the request ID. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_postsign>.
            pub $($async_)? fn parity_post_sign(
                &self,
                address: &str,
                message: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(message)?);
                self.call("parity_postSign", args)$($await_)*
            }

            /// Returns the request ID from a transaction posted without waiting for
            /// the signer. If the account is unlocked, returns the transaction hash
            /// instead. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_posttransaction>.
            pub $($async_)? fn parity_post_transaction(
                &self,
                transaction: &TransactionRequest,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(transaction)?);
                self.call("parity_postTransaction", args)$($await_)*
            }

            /// Returns the address for the global registry. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_registryaddress>.
            pub $($async_)? fn parity_registry_address(&self) -> crate::Result<$resp> {
                self.call("parity_registryAddress", CallArgs::new())$($await_)*
            }

            /// Returns information about the release status. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_releasesinfo>.
            pub $($async_)? fn parity_releases_info(&self) -> crate::Result<$resp> {
                self.call("parity_releasesInfo", CallArgs::new())$($await_)*
            }

            /// Returns the transaction data for the removed transaction, or null.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_releasesinfo>.
            pub $($async_)? fn parity_remove_transaction(&self, hash: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(hash)?);
                self.call("parity_removeTransaction", args)$($await_)*
            }

            /// Returns current RPC API settings. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_rpcsettings>.
            pub $($async_)? fn parity_rpc_settings(&self) -> crate::Result<$resp> {
                self.call("parity_rpcSettings", CallArgs::new())$($await_)*
            }

            /// Returns if vault metadata was successfully set. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_setvaultmeta>.
            pub $($async_)? fn parity_set_vault_meta(
                &self,
                vault: &str,
                metadata: &serde_json::Value,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(vault)?)
                    .arg(val(metadata)?);
                self.call("parity_setVaultMeta", args)$($await_)*
            }

            /// Returns generated signature for the message. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_signmessage>.
            pub $($async_)? fn parity_sign_message(
                &self,
                address: &str,
                password: &str,
                hash: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(password)?)
                    .arg(val(hash)?);
                self.call("parity_signMessage", args)$($await_)*
            }

            /// Returns the max number of transactions in queue. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_transactionslimit>.
            pub $($async_)? fn parity_transactions_limit(&self) -> crate::Result<$resp> {
                self.call("parity_transactionsLimit", CallArgs::new())$($await_)*
            }

            /// Returns the number of unsigned transactions if using a trusted
            /// signer. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_unsignedtransactionscount>.
            pub $($async_)? fn parity_unsigned_transactions_count(&self) -> crate::Result<$resp> {
                self.call("parity_unsignedTransactionsCount", CallArgs::new())$($await_)*
            }

            /// Returns information about the Parity version. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_versioninfo>.
            pub $($async_)? fn parity_version_info(&self) -> crate::Result<$resp> {
                self.call("parity_versionInfo", CallArgs::new())$($await_)*
            }

            /// Returns hostname and port of Websockets server. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity-module#parity_wsurl>.
            pub $($async_)? fn parity_ws_url(&self) -> crate::Result<$resp> {
                self.call("parity_wsUrl", CallArgs::new())$($await_)*
            }

            /// Returns if now accepts non-reserved peers. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_acceptnonreservedpeers>.
            pub $($async_)? fn parity_accept_non_reserved_peers(&self) -> crate::Result<$resp> {
                self.call("parity_acceptNonReservedPeers", CallArgs::new())$($await_)*
            }

            /// Returns if the reserved peer was added. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_addreservedpeer>.
            pub $($async_)? fn parity_add_reserved_peer(&self, enode: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(enode)?);
                self.call("parity_addReservedPeer", args)$($await_)*
            }

            /// Returns a list of local dapps. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_dappslist>.
            pub $($async_)? fn parity_dapps_list(&self) -> crate::Result<$resp> {
                self.call("parity_dappsList", CallArgs::new())$($await_)*
            }

            /// Returns if all non-reserved peers were successfully dropped. Parity
            /// only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_dropnonreservedpeers>.
            pub $($async_)? fn parity_drop_non_reserved_peers(&self) -> crate::Result<$resp> {
                self.call("parity_dropNonReservedPeers", CallArgs::new())$($await_)*
            }

            /// Returns if the upgrade was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_executeupgrade>.
            pub $($async_)? fn parity_execute_upgrade(&self) -> crate::Result<$resp> {
                self.call("parity_executeUpgrade", CallArgs::new())$($await_)*
            }

            /// Returns the Keccak-256 hash of the contents at the URI. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_hashcontent>.
            pub $($async_)? fn parity_hash_content(&self, uri: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(uri)?);
                self.call("parity_hashContent", args)$($await_)*
            }

            /// Returns if the reserved peer was removed. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_removereservedpeer>.
            pub $($async_)? fn parity_remove_reserved_peer(&self, enode: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(enode)?);
                self.call("parity_removeReservedPeer", args)$($await_)*
            }

            /// Returns if the author address for mined blocks was successfully set.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_setauthor>.
            pub $($async_)? fn parity_set_author(&self, address: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?);
                self.call("parity_setAuthor", args)$($await_)*
            }

            /// Returns if the network specification was successfully set. Parity
            /// only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_setchain>.
            pub $($async_)? fn parity_set_chain(&self, chain: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(chain)?);
                self.call("parity_setChain", args)$($await_)*
            }

            /// Returns if the authority account for consensus messages was
            /// successfully set. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_setenginesigner>.
            pub $($async_)? fn parity_set_engine_signer(
                &self,
                address: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(password)?);
                self.call("parity_setEngineSigner", args)$($await_)*
            }

            /// Returns if the extra data for mined blocks was successfully set.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_setextradata>.
            pub $($async_)? fn parity_set_extra_data(&self, data: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(data)?);
                self.call("parity_setExtraData", args)$($await_)*
            }

            /// Returns if the gas ceiling target was successfully set. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_setgasceiltarget>.
            pub $($async_)? fn parity_set_gas_ceil_target(
                &self,
                gas: Option<u64>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(gas) = gas {
                    args = args.kwarg("gas", val(params::quantity(gas))?);
                }
                self.call("parity_setGasCeilTarget", args)$($await_)*
            }

            /// Returns if the gas floor target was successfully set. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_setgasfloortarget>.
            pub $($async_)? fn parity_set_gas_floor_target(
                &self,
                gas: Option<u64>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(gas) = gas {
                    args = args.kwarg("gas", val(params::quantity(gas))?);
                }
                self.call("parity_setGasFloorTarget", args)$($await_)*
            }

            /// Returns if gas limited per transaction was successfully set. Parity
            /// only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_setmaxtransactiongas>.
            pub $($async_)? fn parity_set_max_transaction_gas(&self, gas: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(gas))?);
                self.call("parity_setMaxTransactionGas", args)$($await_)*
            }

            /// Returns if the minimum gas price for a transaction to be accepted
            /// was successfully set. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_setmingasprice>.
            pub $($async_)? fn parity_set_min_gas_price(&self, gas_price: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(gas_price))?);
                self.call("parity_setMinGasPrice", args)$($await_)*
            }

            /// Returns if the Parity mode was successfully set. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_setmode>.
            pub $($async_)? fn parity_set_mode(&self, mode: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(mode)?);
                self.call("parity_setMode", args)$($await_)*
            }

            /// Returns if the transaction limit was successfully set. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_settransactionslimit>.
            pub $($async_)? fn parity_set_transactions_limit(
                &self,
                limit: u64,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(limit))?);
                self.call("parity_setTransactionsLimit", args)$($await_)*
            }

            /// Returns if Parity has an upgrade available. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_set-module#parity_upgradeready>.
            pub $($async_)? fn parity_upgrade_ready(&self) -> crate::Result<$resp> {
                self.call("parity_upgradeReady", CallArgs::new())$($await_)*
            }

            /// Starts a Parity pub-sub subscription that re-delivers the result
            /// of another RPC method whenever it changes. The inner method is
            /// named by either spelling and bound like a direct call; its built
            /// params are nested inside this call's parameter list.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-Parity-Pub-Sub-module#parity_subscribe>.
            pub $($async_)? fn parity_subscribe(
                &self,
                method: &str,
                args: CallArgs,
            ) -> crate::Result<$resp> {
                let spec = registry::lookup(method)
                    .ok_or_else(|| Error::UnknownMethod(method.to_string()))?;
                let inner = builder::bind_params(spec, args, self.default_block())?;
                let outer = CallArgs::new()
                    .arg(val(spec.rpc_name)?)
                    .arg(serde_json::Value::Array(inner));
                self.call("parity_subscribe", outer)$($await_)*
            }

            /// Returns if the unsubscribe request was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-Parity-Pub-Sub-module#parity_unsubscribe>.
            pub $($async_)? fn parity_unsubscribe(&self, subscription_id: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(subscription_id))?);
                self.call("parity_unsubscribe", args)$($await_)*
            }

            /// Returns a map of account info. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_allaccountsinfo>.
            pub $($async_)? fn parity_all_accounts_info(&self) -> crate::Result<$resp> {
                self.call("parity_allAccountsInfo", CallArgs::new())$($await_)*
            }

            /// Returns if password change was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_changepassword>.
            pub $($async_)? fn parity_change_password(
                &self,
                address: &str,
                old_password: &str,
                new_password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(old_password)?)
                    .arg(val(new_password)?);
                self.call("parity_changePassword", args)$($await_)*
            }

            /// Returns the derived account address. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_changepassword>.
            pub $($async_)? fn parity_derive_address_hash(
                &self,
                address: &str,
                password: &str,
                derivation: &Derivation,
                save_account: Option<bool>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(password)?)
                    .arg(val(derivation)?);
                if let Some(save_account) = save_account {
                    args = args.kwarg("save_account", val(save_account)?);
                }
                self.call("parity_deriveAddressHash", args)$($await_)*
            }

            /// Returns the derived account address. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_deriveaddressindex>.
            pub $($async_)? fn parity_derive_address_index(
                &self,
                address: &str,
                password: &str,
                derivation: &[DerivationStep],
                save_account: Option<bool>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(password)?)
                    .arg(val(derivation)?);
                if let Some(save_account) = save_account {
                    args = args.kwarg("save_account", val(save_account)?);
                }
                self.call("parity_deriveAddressIndex", args)$($await_)*
            }

            /// Returns the standard wallet file for the account. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_exportaccount>.
            pub $($async_)? fn parity_export_account(
                &self,
                address: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(password)?);
                self.call("parity_exportAccount", args)$($await_)*
            }

            /// Returns a list of account addresses matching the dapp. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_getdappaddresses>.
            pub $($async_)? fn parity_get_dapp_addresses(&self, dapp: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(dapp)?);
                self.call("parity_getDappAddresses", args)$($await_)*
            }

            /// Returns the default account address for the dapp. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_getdappdefaultaddress>.
            pub $($async_)? fn parity_get_dapp_default_address(
                &self,
                dapp: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(dapp)?);
                self.call("parity_getDappDefaultAddress", args)$($await_)*
            }

            /// Returns a list of account addresses for new dapps. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_getnewdappsaddresses>.
            pub $($async_)? fn parity_get_new_dapps_addresses(&self) -> crate::Result<$resp> {
                self.call("parity_getNewDappsAddresses", CallArgs::new())$($await_)*
            }

            /// Returns the default account address for new dapps. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_getnewdappsdefaultaddress>.
            pub $($async_)? fn parity_get_new_dapps_default_address(&self) -> crate::Result<$resp> {
                self.call("parity_getNewDappsDefaultAddress", CallArgs::new())$($await_)*
            }

            /// Returns a list of the imported geth account addresses. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_importgethaccounts>.
            pub $($async_)? fn parity_import_geth_accounts(
                &self,
                addresses: &[&str],
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(addresses)?);
                self.call("parity_importGethAccounts", args)$($await_)*
            }

            /// Returns if the account deletion was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_killaccount>.
            pub $($async_)? fn parity_kill_account(
                &self,
                address: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(password)?);
                self.call("parity_killAccount", args)$($await_)*
            }

            /// Returns a list of the available geth accounts. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_listgethaccounts>.
            pub $($async_)? fn parity_list_geth_accounts(&self) -> crate::Result<$resp> {
                self.call("parity_listGethAccounts", CallArgs::new())$($await_)*
            }

            /// Returns a list of the most recent active dapps. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_listrecentdapps>.
            pub $($async_)? fn parity_list_recent_dapps(&self) -> crate::Result<$resp> {
                self.call("parity_listRecentDapps", CallArgs::new())$($await_)*
            }

            /// Returns the address of the newly created account. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_newaccountfromphrase>.
            pub $($async_)? fn parity_new_account_from_phrase(
                &self,
                phrase: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(phrase)?)
                    .arg(val(password)?);
                self.call("parity_newAccountFromPhrase", args)$($await_)*
            }

            /// Returns the address of the newly created account. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_newaccountfromsecret>.
            pub $($async_)? fn parity_new_account_from_secret(
                &self,
                secret: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(secret)?)
                    .arg(val(password)?);
                self.call("parity_newAccountFromSecret", args)$($await_)*
            }

            /// Returns the address of the newly created account. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_newaccountfromwallet>.
            pub $($async_)? fn parity_new_account_from_wallet(
                &self,
                wallet: &serde_json::Value,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(wallet)?)
                    .arg(val(password)?);
                self.call("parity_newAccountFromWallet", args)$($await_)*
            }

            /// Returns if the account removal from the addressbook was successful.
            /// Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_removeaddress>.
            pub $($async_)? fn parity_remove_address(&self, address: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?);
                self.call("parity_removeAddress", args)$($await_)*
            }

            /// Returns if the account metadata was successfully set. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_setaccountmeta>.
            pub $($async_)? fn parity_set_account_meta(
                &self,
                address: &str,
                metadata: &serde_json::Value,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(metadata)?);
                self.call("parity_setAccountMeta", args)$($await_)*
            }

            /// Returns if the account metadata was successfully set. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_setaccountname>.
            pub $($async_)? fn parity_set_account_name(
                &self,
                address: &str,
                name: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(name)?);
                self.call("parity_setAccountName", args)$($await_)*
            }

            /// Returns if the account list for a dapp was successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_setdappaddresses>.
            pub $($async_)? fn parity_set_dapp_addresses(
                &self,
                dapp: &str,
                addresses: &[&str],
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(dapp)?)
                    .arg(val(addresses)?);
                self.call("parity_setDappAddresses", args)$($await_)*
            }

            /// Returns if the setting the default account for a dapp was
            /// successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_setdappdefaultaddress>.
            pub $($async_)? fn parity_set_dapp_default_address(
                &self,
                dapp: &str,
                address: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(dapp)?)
                    .arg(val(address)?);
                self.call("parity_setDappDefaultAddress", args)$($await_)*
            }

            /// Returns if the setting the list of accounts for new dapps was
            /// successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_setnewdappsaddresses>.
            pub $($async_)? fn parity_set_new_dapps_addresses(
                &self,
                addresses: &[&str],
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(addresses)?);
                self.call("parity_setNewDappsAddresses", args)$($await_)*
            }

            /// Returns if the setting the default account for new dapps was
            /// successful. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_setnewdappsdefaultaddress>.
            pub $($async_)? fn parity_set_new_dapps_default_address(
                &self,
                address: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?);
                self.call("parity_setNewDappsDefaultAddress", args)$($await_)*
            }

            /// Returns if the the account address/password pair can unlock an
            /// account without unlocking it. Parity only.
            ///
            /// See <https://github.com/paritytech/parity/wiki/JSONRPC-parity_accounts-module#parity_testpassword>.
            pub $($async_)? fn parity_test_password(
                &self,
                address: &str,
                password: &str,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?)
                    .arg(val(password)?);
                self.call("parity_testPassword", args)$($await_)*
            }
        }
    };
}

parity_methods!(() () crate::Client, reqwest::blocking::Response);
parity_methods!((async) (.await) crate::AsyncClient, reqwest::Response);
