//! Method table for the Ethereum JSON-RPC API
//!
//! One entry per supported method: snake_case alias, camelCase wire
//! name, fixed id constant, and the wire parameter list with
//! defaults. The name pairs, ids, and defaults are the external
//! contract of the dispatch surface and are reproduced verbatim from
//! the node documentation; treat this file as data, not code.

use super::ParamDefault as D;
use super::{MethodSpec, ParamDefault, ParamSpec};

const fn req(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        default: ParamDefault::Required,
    }
}

const fn opt(name: &'static str, default: ParamDefault) -> ParamSpec {
    ParamSpec { name, default }
}

macro_rules! method {
    ($name:literal, $rpc:literal, $id:literal) => {
        MethodSpec {
            name: $name,
            rpc_name: $rpc,
            id: $id,
            params: &[],
        }
    };
    ($name:literal, $rpc:literal, $id:literal, $($param:expr),+ $(,)?) => {
        MethodSpec {
            name: $name,
            rpc_name: $rpc,
            id: $id,
            params: &[$($param),+],
        }
    };
}

/// Every supported method, grouped by namespace.
pub static METHODS: &[MethodSpec] = &[
    // web3
    method!("web3_client_version", "web3_clientVersion", 67),
    method!("web3_sha3", "web3_sha3", 64, req("data")),
    // net
    method!("net_listening", "net_listening", 67),
    method!("net_peer_count", "net_peerCount", 74),
    method!("net_version", "net_version", 67),
    // eth
    method!("eth_accounts", "eth_accounts", 1),
    method!("eth_block_number", "eth_blockNumber", 83),
    method!("eth_call", "eth_call", 1, req("transaction"), req("block")),
    method!("eth_coinbase", "eth_coinbase", 64),
    method!("eth_compile_lll", "eth_compileLLL", 1, req("code")),
    method!("eth_compile_serpent", "eth_compileSerpent", 1, req("code")),
    method!("eth_compile_solidity", "eth_compileSolidity", 1, req("code")),
    method!("eth_estimate_gas", "eth_estimateGas", 1, req("transaction")),
    method!("eth_gas_price", "eth_gasPrice", 73),
    method!("eth_get_balance", "eth_getBalance", 1, req("address"), opt("block", D::Block)),
    method!(
        "eth_get_block_by_hash",
        "eth_getBlockByHash",
        1,
        req("hash"),
        opt("use_full", D::Bool(false)),
    ),
    method!(
        "eth_get_block_by_number",
        "eth_getBlockByNumber",
        1,
        opt("block", D::Block),
        opt("use_full", D::Bool(false)),
    ),
    method!(
        "eth_get_block_transaction_count_by_hash",
        "eth_getBlockTransactionCountByHash",
        1,
        req("hash"),
    ),
    method!(
        "eth_get_block_transaction_count_by_number",
        "eth_getBlockTransactionCountByNumber",
        1,
        opt("block", D::Block),
    ),
    method!("eth_get_code", "eth_getCode", 1, req("address"), opt("block", D::Block)),
    method!("eth_get_compilers", "eth_getCompilers", 1),
    method!("eth_get_filter_changes", "eth_getFilterChanges", 73, req("filter_id")),
    method!("eth_get_filter_logs", "eth_getFilterLogs", 73, req("filter_id")),
    method!("eth_get_logs", "eth_getLogs", 73, opt("filter", D::EmptyObject)),
    method!(
        "eth_get_storage_at",
        "eth_getStorageAt",
        1,
        req("address"),
        req("position"),
        opt("block", D::Block),
    ),
    method!(
        "eth_get_transaction_by_block_hash_and_index",
        "eth_getTransactionByBlockHashAndIndex",
        1,
        req("hash"),
        opt("index", D::Quantity(0)),
    ),
    method!(
        "eth_get_transaction_by_block_number_and_index",
        "eth_getTransactionByBlockNumberAndIndex",
        1,
        opt("block", D::Block),
        opt("index", D::Quantity(0)),
    ),
    method!("eth_get_transaction_by_hash", "eth_getTransactionByHash", 1, req("hash")),
    method!(
        "eth_get_transaction_count",
        "eth_getTransactionCount",
        1,
        req("address"),
        opt("block", D::Block),
    ),
    method!("eth_get_transaction_receipt", "eth_getTransactionReceipt", 1, req("hash")),
    method!(
        "eth_get_uncle_by_block_hash_and_index",
        "eth_getUncleByBlockHashAndIndex",
        1,
        req("hash"),
        opt("index", D::Quantity(0)),
    ),
    method!(
        "eth_get_uncle_by_block_number_and_index",
        "eth_getUncleByBlockNumberAndIndex",
        1,
        opt("block", D::Block),
        opt("index", D::Quantity(0)),
    ),
    method!("eth_get_uncle_count_by_block_hash", "eth_getUncleCountByBlockHash", 1, req("hash")),
    method!(
        "eth_get_uncle_count_by_block_number",
        "eth_getUncleCountByBlockNumber",
        1,
        opt("block", D::Block),
    ),
    method!("eth_get_work", "eth_getWork", 73),
    method!("eth_hashrate", "eth_hashrate", 71),
    method!("eth_mining", "eth_mining", 71),
    method!("eth_new_block_filter", "eth_newBlockFilter", 73),
    method!("eth_new_filter", "eth_newFilter", 73, opt("filter", D::EmptyObject)),
    method!("eth_new_pending_transaction_filter", "eth_newPendingTransactionFilter", 73),
    method!("eth_protocol_version", "eth_protocolVersion", 67),
    method!("eth_send_raw_transaction", "eth_sendRawTransaction", 1, req("data")),
    method!("eth_send_transaction", "eth_sendTransaction", 1, req("transaction")),
    method!("eth_sign", "eth_sign", 1, req("address"), req("message")),
    method!("eth_sign_transaction", "eth_signTransaction", 1, req("transaction")),
    method!("eth_submit_hashrate", "eth_submitHashrate", 73, req("hashrate"), req("client_id")),
    method!(
        "eth_submit_work",
        "eth_submitWork",
        73,
        req("nonce"),
        req("pow_hash"),
        req("mix_digest"),
    ),
    method!("eth_syncing", "eth_syncing", 1),
    method!("eth_uninstall_filter", "eth_uninstallFilter", 73, req("filter_id")),
    method!("eth_subscribe", "eth_subscribe", 1, req("kind"), opt("filter", D::EmptyObject)),
    method!("eth_unsubscribe", "eth_unsubscribe", 1, req("subscription_id")),
    // personal
    method!("personal_ec_recover", "personal_ecRecover", 1, req("message"), req("signature")),
    method!(
        "personal_import_raw_key",
        "personal_importRawKey",
        1,
        req("private_key"),
        req("password"),
    ),
    method!("personal_list_accounts", "personal_listAccounts", 1),
    method!("personal_lock_account", "personal_lockAccount", 1, req("address")),
    method!("personal_new_account", "personal_newAccount", 1, req("password")),
    method!(
        "personal_send_transaction",
        "personal_sendTransaction",
        1,
        req("transaction"),
        req("password"),
    ),
    method!("personal_sign", "personal_sign", 1, req("message"), req("address"), req("password")),
    method!(
        "personal_unlock_account",
        "personal_unlockAccount",
        1,
        req("address"),
        req("password"),
        opt("duration", D::Null),
    ),
    // parity
    method!("parity_accounts_info", "parity_accountsInfo", 1),
    method!("parity_chain", "parity_chain", 1),
    method!("parity_chain_status", "parity_chainStatus", 1),
    method!("parity_change_vault", "parity_changeVault", 1, req("address"), req("vault")),
    method!(
        "parity_change_vault_password",
        "parity_changeVaultPassword",
        1,
        req("vault"),
        req("password"),
    ),
    method!("parity_check_request", "parity_checkRequest", 1, req("request_id")),
    method!("parity_cid_v0", "parity_cidV0", 1, req("data")),
    method!("parity_close_vault", "parity_closeVault", 1, req("vault")),
    method!("parity_compose_transaction", "parity_composeTransaction", 1, req("transaction")),
    method!("parity_consensus_capability", "parity_consensusCapability", 1),
    method!("parity_dapps_url", "parity_dappsUrl", 1),
    method!("parity_decrypt_message", "parity_decryptMessage", 1, req("address"), req("message")),
    method!("parity_default_account", "parity_defaultAccount", 1),
    method!("parity_default_extra_data", "parity_defaultExtraData", 1),
    method!("parity_dev_logs", "parity_devLogs", 1),
    method!("parity_dev_logs_levels", "parity_devLogsLevels", 1),
    method!("parity_encrypt_message", "parity_encryptMessage", 1, req("hash"), req("message")),
    method!("parity_enode", "parity_enode", 1),
    method!("parity_extra_data", "parity_extraData", 1),
    method!("parity_future_transactions", "parity_futureTransactions", 1),
    method!("parity_gas_ceil_target", "parity_gasCeilTarget", 1),
    method!("parity_gas_floor_target", "parity_gasFloorTarget", 1),
    method!("parity_gas_price_histogram", "parity_gasPriceHistogram", 1),
    method!("parity_generate_secret_phrase", "parity_generateSecretPhrase", 1),
    method!(
        "parity_get_block_header_by_number",
        "parity_getBlockHeaderByNumber",
        1,
        opt("block", D::Block),
    ),
    method!("parity_get_vault_meta", "parity_getVaultMeta", 1, req("vault")),
    method!("parity_hardware_accounts_info", "parity_hardwareAccountsInfo", 1),
    method!(
        "parity_list_accounts",
        "parity_listAccounts",
        1,
        req("count"),
        opt("offset", D::Null),
        opt("block", D::Absent),
    ),
    method!("parity_list_opened_vaults", "parity_listOpenedVaults", 1),
    method!(
        "parity_list_storage_keys",
        "parity_listStorageKeys",
        1,
        req("address"),
        req("count"),
        opt("offset", D::Null),
        opt("block", D::Absent),
    ),
    method!("parity_list_vaults", "parity_listVaults", 1),
    method!("parity_local_transactions", "parity_localTransactions", 1),
    method!("parity_min_gas_price", "parity_minGasPrice", 1),
    method!("parity_mode", "parity_mode", 1),
    method!("parity_new_vault", "parity_newVault", 1, req("vault"), req("password")),
    method!("parity_net_chain", "parity_netChain", 1),
    method!("parity_net_peers", "parity_netPeers", 1),
    method!("parity_net_port", "parity_netPort", 1),
    method!("parity_next_nonce", "parity_nextNonce", 1, req("address")),
    method!("parity_node_kind", "parity_nodeKind", 1),
    method!("parity_node_name", "parity_nodeName", 1),
    method!("parity_pending_transactions", "parity_pendingTransactions", 1),
    method!("parity_pending_transactions_stats", "parity_pendingTransactionsStats", 1),
    method!("parity_phrase_to_address", "parity_phraseToAddress", 1, req("phrase")),
    method!("parity_open_vault", "parity_openVault", 1, req("vault"), req("password")),
    method!("parity_post_sign", "parity_postSign", 1, req("address"), req("message")),
    method!("parity_post_transaction", "parity_postTransaction", 1, req("transaction")),
    method!("parity_registry_address", "parity_registryAddress", 1),
    method!("parity_releases_info", "parity_releasesInfo", 1),
    method!("parity_remove_transaction", "parity_removeTransaction", 1, req("hash")),
    method!("parity_rpc_settings", "parity_rpcSettings", 1),
    method!("parity_set_vault_meta", "parity_setVaultMeta", 1, req("vault"), req("metadata")),
    method!(
        "parity_sign_message",
        "parity_signMessage",
        1,
        req("address"),
        req("password"),
        req("hash"),
    ),
    method!("parity_transactions_limit", "parity_transactionsLimit", 1),
    method!("parity_unsigned_transactions_count", "parity_unsignedTransactionsCount", 1),
    method!("parity_version_info", "parity_versionInfo", 1),
    method!("parity_ws_url", "parity_wsUrl", 1),
    method!("parity_accept_non_reserved_peers", "parity_acceptNonReservedPeers", 1),
    method!("parity_add_reserved_peer", "parity_addReservedPeer", 1, req("enode")),
    method!("parity_dapps_list", "parity_dappsList", 1),
    method!("parity_drop_non_reserved_peers", "parity_dropNonReservedPeers", 1),
    method!("parity_execute_upgrade", "parity_executeUpgrade", 1),
    method!("parity_hash_content", "parity_hashContent", 1, req("uri")),
    method!("parity_remove_reserved_peer", "parity_removeReservedPeer", 1, req("enode")),
    method!("parity_set_author", "parity_setAuthor", 1, req("address")),
    method!("parity_set_chain", "parity_setChain", 1, req("chain")),
    method!(
        "parity_set_engine_signer",
        "parity_setEngineSigner",
        1,
        req("address"),
        req("password"),
    ),
    method!("parity_set_extra_data", "parity_setExtraData", 1, req("data")),
    method!(
        "parity_set_gas_ceil_target",
        "parity_setGasCeilTarget",
        1,
        opt("gas", D::Quantity(0)),
    ),
    method!(
        "parity_set_gas_floor_target",
        "parity_setGasFloorTarget",
        1,
        opt("gas", D::Quantity(0)),
    ),
    method!("parity_set_max_transaction_gas", "parity_setMaxTransactionGas", 1, req("gas")),
    method!("parity_set_min_gas_price", "parity_setMinGasPrice", 1, req("gas_price")),
    method!("parity_set_mode", "parity_setMode", 1, req("mode")),
    method!("parity_set_transactions_limit", "parity_setTransactionsLimit", 1, req("limit")),
    method!("parity_upgrade_ready", "parity_upgradeReady", 1),
    method!(
        "parity_subscribe",
        "parity_subscribe",
        1,
        req("method"),
        opt("params", D::EmptyArray),
    ),
    method!("parity_unsubscribe", "parity_unsubscribe", 1, req("subscription_id")),
    method!("parity_all_accounts_info", "parity_allAccountsInfo", 1),
    method!(
        "parity_change_password",
        "parity_changePassword",
        1,
        req("address"),
        req("old_password"),
        req("new_password"),
    ),
    method!(
        "parity_derive_address_hash",
        "parity_deriveAddressHash",
        1,
        req("address"),
        req("password"),
        req("derivation"),
        opt("save_account", D::Bool(false)),
    ),
    method!(
        "parity_derive_address_index",
        "parity_deriveAddressIndex",
        1,
        req("address"),
        req("password"),
        req("derivation"),
        opt("save_account", D::Bool(false)),
    ),
    method!("parity_export_account", "parity_exportAccount", 1, req("address"), req("password")),
    method!("parity_get_dapp_addresses", "parity_getDappAddresses", 1, req("dapp")),
    method!("parity_get_dapp_default_address", "parity_getDappDefaultAddress", 1, req("dapp")),
    method!("parity_get_new_dapps_addresses", "parity_getNewDappsAddresses", 1),
    method!("parity_get_new_dapps_default_address", "parity_getNewDappsDefaultAddress", 1),
    method!("parity_import_geth_accounts", "parity_importGethAccounts", 1, req("addresses")),
    method!("parity_kill_account", "parity_killAccount", 1, req("address"), req("password")),
    method!("parity_list_geth_accounts", "parity_listGethAccounts", 1),
    method!("parity_list_recent_dapps", "parity_listRecentDapps", 1),
    method!(
        "parity_new_account_from_phrase",
        "parity_newAccountFromPhrase",
        1,
        req("phrase"),
        req("password"),
    ),
    method!(
        "parity_new_account_from_secret",
        "parity_newAccountFromSecret",
        1,
        req("secret"),
        req("password"),
    ),
    method!(
        "parity_new_account_from_wallet",
        "parity_newAccountFromWallet",
        1,
        req("wallet"),
        req("password"),
    ),
    method!("parity_remove_address", "parity_removeAddress", 1, req("address")),
    method!(
        "parity_set_account_meta",
        "parity_setAccountMeta",
        1,
        req("address"),
        req("metadata"),
    ),
    method!("parity_set_account_name", "parity_setAccountName", 1, req("address"), req("name")),
    method!(
        "parity_set_dapp_addresses",
        "parity_setDappAddresses",
        1,
        req("dapp"),
        req("addresses"),
    ),
    method!(
        "parity_set_dapp_default_address",
        "parity_setDappDefaultAddress",
        1,
        req("dapp"),
        req("address"),
    ),
    method!("parity_set_new_dapps_addresses", "parity_setNewDappsAddresses", 1, req("addresses")),
    method!(
        "parity_set_new_dapps_default_address",
        "parity_setNewDappsDefaultAddress",
        1,
        req("address"),
    ),
    method!("parity_test_password", "parity_testPassword", 1, req("address"), req("password")),
    // signer
    method!(
        "signer_confirm_request",
        "signer_confirmRequest",
        1,
        req("request_id"),
        opt("modification", D::EmptyObject),
        req("password"),
    ),
    method!(
        "signer_confirm_request_raw",
        "signer_confirmRequestRaw",
        1,
        req("request_id"),
        req("data"),
    ),
    method!(
        "signer_confirm_request_with_token",
        "signer_confirmRequestWithToken",
        1,
        req("request_id"),
        opt("modification", D::EmptyObject),
        req("password"),
    ),
    method!("signer_generate_authorization_token", "signer_generateAuthorizationToken", 1),
    method!(
        "signer_generate_web_proxy_access_token",
        "signer_generateWebProxyAccessToken",
        1,
        req("domain"),
    ),
    method!("signer_reject_request", "signer_rejectRequest", 1, req("request_id")),
    method!("signer_requests_to_confirm", "signer_requestsToConfirm", 1),
    method!("signer_subscribe_pending", "signer_subscribePending", 1),
    method!("signer_unsubscribe_pending", "signer_unsubscribePending", 1, req("subscription_id")),
    // trace
    method!("trace_block", "trace_block", 1, opt("block", D::Block)),
    method!("trace_call", "trace_call", 1, req("transaction"), req("block")),
    method!("trace_filter", "trace_filter", 1, opt("filter", D::EmptyObject)),
    method!("trace_get", "trace_get", 1, req("hash"), opt("index", D::Quantity(0))),
    method!("trace_raw_transaction", "trace_RawTransaction", 1, req("data"), req("trace_types")),
    method!(
        "trace_replay_transaction",
        "trace_replayTransaction",
        1,
        req("hash"),
        req("trace_types"),
    ),
    method!("trace_transaction", "trace_transaction", 1, req("hash")),
    // admin
    method!("admin_add_peer", "admin_addPeer", 1, req("enode")),
    method!("admin_datadir", "admin_datadir", 1),
    method!("admin_node_info", "admin_nodeInfo", 1),
    method!("admin_peers", "admin_peers", 1),
    method!("admin_set_solc", "admin_setSolc", 1, req("path")),
    method!(
        "admin_start_rpc",
        "admin_startRPC",
        1,
        opt("host", D::Str("localhost")),
        opt("port", D::Quantity(8545)),
        opt("cors", D::Str("")),
        opt("apis", D::Str("eth,net,web3")),
    ),
    method!(
        "admin_start_ws",
        "admin_startWS",
        1,
        opt("host", D::Str("localhost")),
        opt("port", D::Quantity(8546)),
        opt("cors", D::Str("")),
        opt("apis", D::Str("eth,net,web3")),
    ),
    method!("admin_stop_rpc", "admin_stopRPC", 1),
    method!("admin_stop_ws", "admin_stopWS", 1),
    // debug
    method!("debug_backtrace_at", "debug_backtraceAt", 1, req("location")),
    method!("debug_block_profile", "debug_blockProfile", 1, req("path"), req("seconds")),
    method!("debug_cpu_profile", "debug_cpuProfile", 1, req("path"), req("seconds")),
    method!("debug_dump_block", "debug_dumpBlock", 1, opt("block", D::Block)),
    method!("debug_gc_stats", "debug_gcStats", 1),
    method!("debug_get_block_rlp", "debug_getBlockRlp", 1, opt("block", D::Block)),
    method!("debug_go_trace", "debug_goTrace", 1, req("path"), req("seconds")),
    method!("debug_mem_stats", "debug_memStats", 1),
    method!("debug_seed_hash", "debug_seedHash", 1, opt("block", D::Block)),
    method!("debug_set_head", "debug_setHead", 1, opt("block", D::Block)),
    method!("debug_set_block_profile_rate", "debug_setBlockProfileRate", 1, req("rate")),
    method!("debug_stacks", "debug_stacks", 1),
    method!("debug_start_cpu_profile", "debug_startCPUProfile", 1, req("path")),
    method!("debug_start_go_trace", "debug_startGoTrace", 1, req("path")),
    method!("debug_stop_cpu_profile", "debug_stopCPUProfile", 1),
    method!("debug_stop_go_trace", "debug_stopGoTrace", 1),
    method!(
        "debug_trace_block",
        "debug_traceBlock",
        1,
        opt("block", D::Block),
        opt("config", D::EmptyObject),
    ),
    method!(
        "debug_trace_block_by_number",
        "debug_traceBlockByNumber",
        1,
        opt("block", D::Block),
        opt("config", D::EmptyObject),
    ),
    method!(
        "debug_trace_block_by_hash",
        "debug_traceBlockByHash",
        1,
        req("hash"),
        opt("config", D::EmptyObject),
    ),
    method!(
        "debug_trace_block_from_file",
        "debug_traceBlockFromFile",
        1,
        req("path"),
        opt("config", D::EmptyObject),
    ),
    method!(
        "debug_trace_transaction",
        "debug_traceTransaction",
        1,
        req("hash"),
        opt("config", D::EmptyObject),
    ),
    method!("debug_verbosity", "debug_verbosity", 1, req("log_level")),
    method!("debug_vmodule", "debug_vmodule", 1, req("log_pattern")),
    method!("debug_write_block_profile", "debug_writeBlockProfile", 1, req("path")),
    method!("debug_write_mem_profile", "debug_writeMemProfile", 1, req("path")),
    // miner
    method!("miner_set_extra", "miner_setExtra", 1, req("data")),
    method!("miner_set_gas_price", "miner_setGasPrice", 1, req("gas_price")),
    method!("miner_start", "miner_start", 1, req("threads")),
    method!("miner_stop", "miner_stop", 1),
    method!("miner_set_ether_base", "miner_setEtherBase", 1, req("address")),
    // txpool
    method!("txpool_content", "txpool_content", 1),
    method!("txpool_inspect", "txpool_inspect", 1),
    method!("txpool_status", "txpool_status", 1),
    // shh
    method!("shh_add_private_key", "shh_addPrivateKey", 1, req("private_key")),
    method!("shh_add_sym_key", "shh_addSymKey", 1, req("sym_key")),
    method!("shh_add_to_group", "shh_addToGroup", 73, req("address")),
    method!("shh_delete_key", "shh_deleteKey", 1, req("key_id")),
    method!("shh_delete_message_filter", "shh_deleteMessageFilter", 1, req("filter_id")),
    method!("shh_get_filter_changes", "shh_getFilterChanges", 73, req("filter_id")),
    method!("shh_get_filter_messages", "shh_getFilterMessages", 1, req("filter_id")),
    method!("shh_get_messages", "shh_getMessages", 73, req("filter_id")),
    method!("shh_get_private_key", "shh_getPrivateKey", 1, req("key_id")),
    method!("shh_get_public_key", "shh_getPublicKey", 1, req("key_id")),
    method!("shh_get_sym_key", "shh_getSymKey", 1, req("key_id")),
    method!("shh_has_identity", "shh_hasIdentity", 73, req("address")),
    method!("shh_info", "shh_info", 1),
    method!("shh_new_filter", "shh_newFilter", 73, req("filter")),
    method!("shh_new_group", "shh_newGroup", 73),
    method!("shh_new_identity", "shh_newIdentity", 73),
    method!("shh_new_key_pair", "shh_newKeyPair", 1),
    method!("shh_new_message_filter", "shh_newMessageFilter", 1, req("filter")),
    method!("shh_new_sym_key", "shh_newSymKey", 1),
    method!("shh_post", "shh_post", 73, req("message")),
    method!("shh_subscribe", "shh_subscribe", 1, req("filter")),
    method!("shh_uninstall_filter", "shh_uninstallFilter", 73, req("filter_id")),
    method!("shh_unsubscribe", "shh_unsubscribe", 1, req("subscription_id")),
    method!("shh_version", "shh_version", 67),
];
