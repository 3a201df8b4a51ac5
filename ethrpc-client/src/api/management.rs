//! The Geth management namespaces: `admin_*`, `debug_*`,
//! `miner_*`, and `txpool_*`.
//!
//! Defined once, instantiated for both HTTP call strategies. Every
//! method binds the arguments the caller supplied and delegates
//! defaults to the request builder, so the parameter table stays the
//! single source of truth.

use crate::val;
use ethrpc_core::builder::CallArgs;
use ethrpc_core::params::{self, BlockId, TraceConfig};

macro_rules! management_methods {
    (($($async_:tt)?) ($($await_:tt)*) $client:ty, $resp:ty) => {
        impl $client {
            /// Returns if the reserved peer was added. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#admin_addpeer>.
            pub $($async_)? fn admin_add_peer(&self, enode: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(enode)?);
                self.call("admin_addPeer", args)$($await_)*
            }

            /// Returns the path to data directory. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#admin_datadir>.
            pub $($async_)? fn admin_datadir(&self) -> crate::Result<$resp> {
                self.call("admin_datadir", CallArgs::new())$($await_)*
            }

            /// Returns an object containing node information. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#admin_nodeinfo>.
            pub $($async_)? fn admin_node_info(&self) -> crate::Result<$resp> {
                self.call("admin_nodeInfo", CallArgs::new())$($await_)*
            }

            /// Returns a list of information for all peers. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#admin_peers>.
            pub $($async_)? fn admin_peers(&self) -> crate::Result<$resp> {
                self.call("admin_peers", CallArgs::new())$($await_)*
            }

            /// Returns the version string from the solidity compiler. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#admin_setsolc>.
            pub $($async_)? fn admin_set_solc(&self, path: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(path)?);
                self.call("admin_setSolc", args)$($await_)*
            }

            /// Returns if the HTTP RPC listener was opened. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#admin_startrpc>.
            pub $($async_)? fn admin_start_rpc(
                &self,
                host: Option<&str>,
                port: Option<u16>,
                cors: Option<&str>,
                apis: Option<&str>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(host) = host {
                    args = args.kwarg("host", val(host)?);
                }
                if let Some(port) = port {
                    args = args.kwarg("port", val(params::quantity(u64::from(port)))?);
                }
                if let Some(cors) = cors {
                    args = args.kwarg("cors", val(cors)?);
                }
                if let Some(apis) = apis {
                    args = args.kwarg("apis", val(apis)?);
                }
                self.call("admin_startRPC", args)$($await_)*
            }

            /// Returns if the Websocket RPC listener was opened. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#admin_startws>.
            pub $($async_)? fn admin_start_ws(
                &self,
                host: Option<&str>,
                port: Option<u16>,
                cors: Option<&str>,
                apis: Option<&str>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(host) = host {
                    args = args.kwarg("host", val(host)?);
                }
                if let Some(port) = port {
                    args = args.kwarg("port", val(params::quantity(u64::from(port)))?);
                }
                if let Some(cors) = cors {
                    args = args.kwarg("cors", val(cors)?);
                }
                if let Some(apis) = apis {
                    args = args.kwarg("apis", val(apis)?);
                }
                self.call("admin_startWS", args)$($await_)*
            }

            /// Returns if the HTTP RPC listener was stopped. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#admin_stoprpc>.
            pub $($async_)? fn admin_stop_rpc(&self) -> crate::Result<$resp> {
                self.call("admin_stopRPC", CallArgs::new())$($await_)*
            }

            /// Returns if the Websocket RPC listener was stopped. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#admin_stopws>.
            pub $($async_)? fn admin_stop_ws(&self) -> crate::Result<$resp> {
                self.call("admin_stopWS", CallArgs::new())$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_backtraceat>.
            pub $($async_)? fn debug_backtrace_at(
                &self,
                file: &str, line: u32,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::backtrace_location(file, line))?);
                self.call("debug_backtraceAt", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_blockprofile>.
            pub $($async_)? fn debug_block_profile(
                &self,
                path: &str,
                seconds: u64,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(path)?)
                    .arg(val(params::quantity(seconds))?);
                self.call("debug_blockProfile", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_cpuprofile>.
            pub $($async_)? fn debug_cpu_profile(
                &self,
                path: &str,
                seconds: u64,
            ) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(path)?)
                    .arg(val(params::quantity(seconds))?);
                self.call("debug_cpuProfile", args)$($await_)*
            }

            /// Returns an object that contains account information corresponding to
            /// the block. Valid tags are {"earliest", "latest", "pending"}. Geth
            /// only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_dumpblock>.
            pub $($async_)? fn debug_dump_block(&self, block: Option<BlockId>) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("debug_dumpBlock", args)$($await_)*
            }

            /// Returns an object of GC statistics. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_gcstats>.
            pub $($async_)? fn debug_gc_stats(&self) -> crate::Result<$resp> {
                self.call("debug_gcStats", CallArgs::new())$($await_)*
            }

            /// Returns the RLP-encoded block. Valid tags are {"earliest", "latest",
            /// "pending"}. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_getblockrlp>.
            pub $($async_)? fn debug_get_block_rlp(
                &self,
                block: Option<BlockId>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("debug_getBlockRlp", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_gotrace>.
            pub $($async_)? fn debug_go_trace(&self, path: &str, seconds: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(path)?)
                    .arg(val(params::quantity(seconds))?);
                self.call("debug_goTrace", args)$($await_)*
            }

            /// Returns an object of memory statistics. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_memstats>.
            pub $($async_)? fn debug_mem_stats(&self) -> crate::Result<$resp> {
                self.call("debug_memStats", CallArgs::new())$($await_)*
            }

            /// Returns the seed hash by block. Valid tags are {"earliest",
            /// "latest", "pending"}. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_seedhash>.
            pub $($async_)? fn debug_seed_hash(&self, block: Option<BlockId>) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("debug_seedHash", args)$($await_)*
            }

            /// Set current head of local change. Use with extreme caution. Valid
            /// tags are {"earliest", "latest", "pending"}. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_sethead>.
            pub $($async_)? fn debug_set_head(&self, block: Option<BlockId>) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                self.call("debug_setHead", args)$($await_)*
            }

            /// Set rate of block profile data collection. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_setblockprofilerate>.
            pub $($async_)? fn debug_set_block_profile_rate(&self, rate: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(rate))?);
                self.call("debug_setBlockProfileRate", args)$($await_)*
            }

            /// Returns an object of all goroutine stacks. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_stacks>.
            pub $($async_)? fn debug_stacks(&self) -> crate::Result<$resp> {
                self.call("debug_stacks", CallArgs::new())$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_startcpuprofile>.
            pub $($async_)? fn debug_start_cpu_profile(&self, path: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(path)?);
                self.call("debug_startCPUProfile", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_startgotrace>.
            pub $($async_)? fn debug_start_go_trace(&self, path: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(path)?);
                self.call("debug_startGoTrace", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_stopcpuprofile>.
            pub $($async_)? fn debug_stop_cpu_profile(&self) -> crate::Result<$resp> {
                self.call("debug_stopCPUProfile", CallArgs::new())$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_stopgotrace>.
            pub $($async_)? fn debug_stop_go_trace(&self) -> crate::Result<$resp> {
                self.call("debug_stopGoTrace", CallArgs::new())$($await_)*
            }

            /// Returns a full stack trace for transactions in block. Valid tags are
            /// {"earliest", "latest", "pending"}. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_traceblock>.
            pub $($async_)? fn debug_trace_block(
                &self,
                block: Option<BlockId>,
                config: Option<&TraceConfig>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                if let Some(config) = config {
                    args = args.kwarg("config", val(config)?);
                }
                self.call("debug_traceBlock", args)$($await_)*
            }

            /// Returns a full stack trace for transactions in block by number.
            /// Valid tags are {"earliest", "latest", "pending"}. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_traceblockbynumber>.
            pub $($async_)? fn debug_trace_block_by_number(
                &self,
                block: Option<BlockId>,
                config: Option<&TraceConfig>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new();
                if let Some(block) = block {
                    args = args.kwarg("block", val(block)?);
                }
                if let Some(config) = config {
                    args = args.kwarg("config", val(config)?);
                }
                self.call("debug_traceBlockByNumber", args)$($await_)*
            }

            /// Returns a full stack trace for transactions in block by hash. Geth
            /// only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_traceblockbyhash>.
            pub $($async_)? fn debug_trace_block_by_hash(
                &self,
                hash: &str,
                config: Option<&TraceConfig>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(hash)?);
                if let Some(config) = config {
                    args = args.kwarg("config", val(config)?);
                }
                self.call("debug_traceBlockByHash", args)$($await_)*
            }

            /// Returns a full stack trace for transactions in block by RLP loaded
            /// from file. Geth only.
            ///
            /// See <https://github.com/ethereumproject/sputnikvm-dev/wiki/Debug-RPCs#debug_traceblockfromfile>.
            pub $($async_)? fn debug_trace_block_from_file(
                &self,
                path: &str,
                config: Option<&TraceConfig>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(path)?);
                if let Some(config) = config {
                    args = args.kwarg("config", val(config)?);
                }
                self.call("debug_traceBlockFromFile", args)$($await_)*
            }

            /// Returns a full stack trace for a transaction by hash. Geth only.
            ///
            /// See <https://github.com/ethereumproject/sputnikvm-dev/wiki/Debug-RPCs#debug_tracetransaction>.
            pub $($async_)? fn debug_trace_transaction(
                &self,
                hash: &str,
                config: Option<&TraceConfig>,
            ) -> crate::Result<$resp> {
                let mut args = CallArgs::new()
                    .arg(val(hash)?);
                if let Some(config) = config {
                    args = args.kwarg("config", val(config)?);
                }
                self.call("debug_traceTransaction", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_verbosity>.
            pub $($async_)? fn debug_verbosity(&self, log_level: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(log_level))?);
                self.call("debug_verbosity", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_vmodule>.
            pub $($async_)? fn debug_vmodule(&self, log_pattern: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(log_pattern)?);
                self.call("debug_vmodule", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_writeblockprofile>.
            pub $($async_)? fn debug_write_block_profile(&self, path: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(path)?);
                self.call("debug_writeBlockProfile", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#debug_writememprofile>.
            pub $($async_)? fn debug_write_mem_profile(&self, path: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(path)?);
                self.call("debug_writeMemProfile", args)$($await_)*
            }

            /// Returns if the extra data for mined blocks was successfully set.
            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#miner_setextra>.
            pub $($async_)? fn miner_set_extra(&self, data: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(data)?);
                self.call("miner_setExtra", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#miner_setgasprice>.
            pub $($async_)? fn miner_set_gas_price(&self, gas_price: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(gas_price))?);
                self.call("miner_setGasPrice", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#miner_start>.
            pub $($async_)? fn miner_start(&self, threads: u64) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(params::quantity(threads))?);
                self.call("miner_start", args)$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#miner_stop>.
            pub $($async_)? fn miner_stop(&self) -> crate::Result<$resp> {
                self.call("miner_stop", CallArgs::new())$($await_)*
            }

            /// Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#miner_setetherbase>.
            pub $($async_)? fn miner_set_ether_base(&self, address: &str) -> crate::Result<$resp> {
                let args = CallArgs::new()
                    .arg(val(address)?);
                self.call("miner_setEtherBase", args)$($await_)*
            }

            /// Returns an object with information for all pending transactions for the
            /// next block. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#txpool_content>.
            pub $($async_)? fn txpool_content(&self) -> crate::Result<$resp> {
                self.call("txpool_content", CallArgs::new())$($await_)*
            }

            /// Returns an object with brief information for all pending transactions
            /// for the next block. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#txpool_inspect>.
            pub $($async_)? fn txpool_inspect(&self) -> crate::Result<$resp> {
                self.call("txpool_inspect", CallArgs::new())$($await_)*
            }

            /// Returns the number of pending and queued transactions. Geth only.
            ///
            /// See <https://github.com/ethereum/go-ethereum/wiki/Management-APIs#txpool_status>.
            pub $($async_)? fn txpool_status(&self) -> crate::Result<$resp> {
                self.call("txpool_status", CallArgs::new())$($await_)*
            }
        }
    };
}

management_methods!(() () crate::Client, reqwest::blocking::Response);
management_methods!((async) (.await) crate::AsyncClient, reqwest::Response);
