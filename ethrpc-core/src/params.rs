//! Typed wire parameters for the Ethereum JSON-RPC API
//!
//! The API encodes almost everything as strings: numeric quantities are
//! `0x`-prefixed hex with minimal digits, block positions are either a
//! tag ("latest") or a hex quantity, and composite arguments
//! (transactions, log filters, whisper messages) are objects whose
//! optional members are omitted entirely when unset. The types here
//! produce those encodings through serde, so the dispatch surface can
//! hand any of them to the request builder as plain JSON values.
//!
//! Formatting of bare numbers lives in the free functions at the bottom
//! (`quantity`, `hashrate`, `work_nonce`, `backtrace_location`).

use serde::{Serialize, Serializer};
use std::fmt;

/// Named block position tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// Genesis block
    Earliest,
    /// Most recent mined block
    Latest,
    /// Pending state/transactions
    Pending,
}

impl BlockTag {
    /// Wire form of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Earliest => "earliest",
            BlockTag::Latest => "latest",
            BlockTag::Pending => "pending",
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BlockTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A block position: either a number or a tag.
///
/// Serializes to the wire form the node expects, a hex quantity for
/// numbers and the bare tag string otherwise.
///
/// # Examples
///
/// ```rust
/// use ethrpc_core::params::{BlockId, BlockTag};
///
/// assert_eq!(serde_json::to_value(BlockId::Number(0x4b7)).unwrap(), "0x4b7");
/// assert_eq!(serde_json::to_value(BlockId::Tag(BlockTag::Pending)).unwrap(), "pending");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockId {
    /// Block number, serialized as a hex quantity
    Number(u64),
    /// Named tag
    Tag(BlockTag),
}

impl Serialize for BlockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BlockId::Number(n) => serializer.serialize_str(&quantity(*n)),
            BlockId::Tag(tag) => tag.serialize(serializer),
        }
    }
}

impl From<u64> for BlockId {
    fn from(n: u64) -> Self {
        BlockId::Number(n)
    }
}

impl From<BlockTag> for BlockId {
    fn from(tag: BlockTag) -> Self {
        BlockId::Tag(tag)
    }
}

/// Transaction call object for `eth_call`, `eth_sendTransaction`,
/// `eth_estimateGas`, the `parity_*Transaction` family, and
/// `personal_sendTransaction`.
///
/// Every member is optional; unset members are omitted from the wire
/// object rather than sent as null. Numeric members serialize as hex
/// quantities.
///
/// # Examples
///
/// ```rust
/// use ethrpc_core::params::TransactionRequest;
///
/// let tx = TransactionRequest::new()
///     .from("0xb60e8dd61c5d32be8058bb8eb970870f07233155")
///     .to("0xd46e8dd67c5d32be8058bb8eb970870f07244567")
///     .gas(30_400)
///     .value(2_441_406_250);
/// let value = serde_json::to_value(&tx).unwrap();
/// assert_eq!(value["gas"], "0x76c0");
/// assert_eq!(value["value"], "0x9184e72a");
/// assert!(value.get("gasPrice").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionRequest {
    /// Sender address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Recipient address; absent for contract creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Gas limit
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "quantity_opt"
    )]
    pub gas: Option<u64>,
    /// Gas price in wei
    #[serde(
        rename = "gasPrice",
        skip_serializing_if = "Option::is_none",
        serialize_with = "quantity_opt"
    )]
    pub gas_price: Option<u64>,
    /// Value in wei
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "quantity_opt"
    )]
    pub value: Option<u64>,
    /// Call data / contract code, hex-encoded by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Sender nonce
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "quantity_opt"
    )]
    pub nonce: Option<u64>,
    /// Parity-only delayed-execution condition, e.g. `{"block": 354221}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<serde_json::Value>,
}

impl TransactionRequest {
    /// Create an empty transaction object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address.
    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = Some(address.into());
        self
    }

    /// Set the recipient address.
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to = Some(address.into());
        self
    }

    /// Set the gas limit.
    pub fn gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    /// Set the gas price in wei.
    pub fn gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Set the value in wei.
    pub fn value(mut self, value: u64) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the call data (hex string).
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Set the sender nonce.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Set a Parity delayed-execution condition.
    pub fn condition(mut self, condition: serde_json::Value) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Log filter object for `eth_newFilter`, `eth_getLogs`, `trace_filter`,
/// and the `logs` variant of `eth_subscribe`.
///
/// All members optional and omitted when unset, matching the documented
/// filter encoding.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOptions {
    /// Start of the block range
    #[serde(rename = "fromBlock", skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockId>,
    /// End of the block range
    #[serde(rename = "toBlock", skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockId>,
    /// Contract address, or an array of addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<serde_json::Value>,
    /// Topic filters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

impl FilterOptions {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start of the block range.
    pub fn from_block(mut self, block: impl Into<BlockId>) -> Self {
        self.from_block = Some(block.into());
        self
    }

    /// Set the end of the block range.
    pub fn to_block(mut self, block: impl Into<BlockId>) -> Self {
        self.to_block = Some(block.into());
        self
    }

    /// Set the contract address (a single address string or an array).
    pub fn address(mut self, address: impl Into<serde_json::Value>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the topic filters.
    pub fn topics<I, T>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.topics = Some(topics.into_iter().map(Into::into).collect());
        self
    }
}

/// Trace kinds accepted by the `trace_*` replay methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TraceType {
    /// Virtual machine state trace
    VmTrace,
    /// Transaction trace
    Trace,
    /// State difference
    StateDiff,
}

/// Tracer configuration for the `debug_trace*` methods.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceConfig {
    /// Disable memory capture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_memory: Option<bool>,
    /// Disable stack capture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_stack: Option<bool>,
    /// Disable storage capture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_storage: Option<bool>,
}

impl TraceConfig {
    /// Create a default tracer configuration (everything enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable or enable memory capture.
    pub fn disable_memory(mut self, disable: bool) -> Self {
        self.disable_memory = Some(disable);
        self
    }

    /// Disable or enable stack capture.
    pub fn disable_stack(mut self, disable: bool) -> Self {
        self.disable_stack = Some(disable);
        self
    }

    /// Disable or enable storage capture.
    pub fn disable_storage(mut self, disable: bool) -> Self {
        self.disable_storage = Some(disable);
        self
    }
}

/// Key derivation type for the `parity_deriveAddress*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivationType {
    /// Hardened derivation (the default)
    Hard,
    /// Soft derivation
    Soft,
}

/// Hash-based derivation specifier for `parity_deriveAddressHash`.
#[derive(Debug, Clone, Serialize)]
pub struct Derivation {
    /// Derivation hash
    pub hash: String,
    /// Derivation type
    #[serde(rename = "type")]
    pub kind: DerivationType,
}

impl Derivation {
    /// Hardened derivation from a hash.
    pub fn hard(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            kind: DerivationType::Hard,
        }
    }

    /// Soft derivation from a hash.
    pub fn soft(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            kind: DerivationType::Soft,
        }
    }
}

/// One step of an index-based derivation sequence for
/// `parity_deriveAddressIndex`.
#[derive(Debug, Clone, Serialize)]
pub struct DerivationStep {
    /// Child index
    pub index: u64,
    /// Derivation type
    #[serde(rename = "type")]
    pub kind: DerivationType,
}

impl DerivationStep {
    /// Hardened derivation at an index.
    pub fn hard(index: u64) -> Self {
        Self {
            index,
            kind: DerivationType::Hard,
        }
    }

    /// Soft derivation at an index.
    pub fn soft(index: u64) -> Self {
        Self {
            index,
            kind: DerivationType::Soft,
        }
    }
}

/// Subscription kinds accepted by `eth_subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionKind {
    /// Log events matching a filter
    Logs,
    /// New block headers
    NewHeads,
}

impl SubscriptionKind {
    /// Wire form of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionKind::Logs => "logs",
            SubscriptionKind::NewHeads => "newHeads",
        }
    }
}

impl Serialize for SubscriptionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Whisper message for `shh_post`.
///
/// Topics, payload, priority and ttl are required; sender and recipient
/// identities are optional and omitted when unset.
#[derive(Debug, Clone, Serialize)]
pub struct WhisperPost {
    /// Topics identifying the message
    pub topics: Vec<String>,
    /// Message body, hex-encoded by the caller
    pub payload: String,
    /// Priority value
    #[serde(serialize_with = "quantity_ser")]
    pub priority: u64,
    /// Time-to-live in seconds
    #[serde(serialize_with = "quantity_ser")]
    pub ttl: u64,
    /// Sender whisper identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Recipient whisper identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl WhisperPost {
    /// Create a message with the required members.
    pub fn new<I, T>(topics: I, payload: impl Into<String>, priority: u64, ttl: u64) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            topics: topics.into_iter().map(Into::into).collect(),
            payload: payload.into(),
            priority,
            ttl,
            from: None,
            to: None,
        }
    }

    /// Set the sender identity.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the recipient identity.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }
}

/// Topic filter for `shh_newFilter`.
#[derive(Debug, Clone, Serialize)]
pub struct WhisperFilter {
    /// Topics to match
    pub topics: Vec<String>,
    /// Recipient identity restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl WhisperFilter {
    /// Create a filter over a set of topics.
    pub fn new<I, T>(topics: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            topics: topics.into_iter().map(Into::into).collect(),
            to: None,
        }
    }

    /// Restrict to messages addressed to an identity.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }
}

/// Message filter for `shh_newMessageFilter` and `shh_subscribe`.
///
/// `decryptWith` is always transmitted, as null when no key is given;
/// the sender restriction is omitted when unset.
#[derive(Debug, Clone, Serialize)]
pub struct MessageFilter {
    /// Topics to match
    pub topics: Vec<String>,
    /// Key id used to decrypt matching messages
    #[serde(rename = "decryptWith")]
    pub decrypt_with: Option<String>,
    /// Sender identity restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl MessageFilter {
    /// Create a filter over a set of topics.
    pub fn new<I, T>(topics: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            topics: topics.into_iter().map(Into::into).collect(),
            decrypt_with: None,
            from: None,
        }
    }

    /// Set the decryption key id.
    pub fn decrypt_with(mut self, key_id: impl Into<String>) -> Self {
        self.decrypt_with = Some(key_id.into());
        self
    }

    /// Restrict to messages from an identity.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

/// Transaction modification object for `signer_confirmRequest`.
///
/// Carries the gas, gas price, and condition overrides a signer may
/// apply when confirming a queued request; unset members are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionModification {
    /// Gas limit override
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "quantity_opt"
    )]
    pub gas: Option<u64>,
    /// Gas price override
    #[serde(
        rename = "gasPrice",
        skip_serializing_if = "Option::is_none",
        serialize_with = "quantity_opt"
    )]
    pub gas_price: Option<u64>,
    /// Delayed-execution condition override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<serde_json::Value>,
}

impl TransactionModification {
    /// Create an empty modification (confirm as queued).
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the gas limit.
    pub fn gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    /// Override the gas price.
    pub fn gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Override the delayed-execution condition.
    pub fn condition(mut self, condition: serde_json::Value) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Format a numeric value as a minimal hex quantity, e.g. `0x41`.
pub fn quantity(value: u64) -> String {
    format!("0x{:x}", value)
}

/// Format a hashrate as a 32-byte hex string.
pub fn hashrate(value: u64) -> String {
    format!("0x{:064x}", value)
}

/// Format a proof-of-work nonce as an 8-byte hex string.
pub fn work_nonce(value: u64) -> String {
    format!("0x{:016x}", value)
}

/// Format a `file:line` location for `debug_backtraceAt`.
pub fn backtrace_location(file: &str, line: u32) -> String {
    format!("{}:{}", file, line)
}

fn quantity_ser<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&quantity(*value))
}

fn quantity_opt<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    // Only reached when Some; None is skipped at the field level.
    match value {
        Some(v) => serializer.serialize_str(&quantity(*v)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quantity_minimal_digits() {
        assert_eq!(quantity(0), "0x0");
        assert_eq!(quantity(65), "0x41");
        assert_eq!(quantity(1024), "0x400");
    }

    #[test]
    fn test_hashrate_width() {
        let formatted = hashrate(0x500000);
        assert_eq!(formatted.len(), 2 + 64);
        assert!(formatted.starts_with("0x"));
        assert!(formatted.ends_with("500000"));
        assert_eq!(
            hashrate(1),
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn test_work_nonce_width() {
        assert_eq!(work_nonce(1), "0x0000000000000001");
    }

    #[test]
    fn test_block_id_forms() {
        assert_eq!(serde_json::to_value(BlockId::Number(0)).unwrap(), "0x0");
        assert_eq!(
            serde_json::to_value(BlockId::Tag(BlockTag::Latest)).unwrap(),
            "latest"
        );
        let from_number: BlockId = 1207u64.into();
        assert_eq!(serde_json::to_value(from_number).unwrap(), "0x4b7");
    }

    #[test]
    fn test_transaction_request_camel_case_and_skips() {
        let tx = TransactionRequest::new()
            .from("0xb60e8dd61c5d32be8058bb8eb970870f07233155")
            .gas_price(10_000_000_000_000)
            .nonce(1);
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["gasPrice"], "0x9184e72a000");
        assert_eq!(value["nonce"], "0x1");
        assert!(value.get("to").is_none());
        assert!(value.get("value").is_none());
        assert!(value.get("condition").is_none());
    }

    #[test]
    fn test_filter_options_wire_names() {
        let filter = FilterOptions::new()
            .from_block(1u64)
            .to_block(BlockTag::Pending)
            .address("0x8888f1f195afa192cfee860698584c030f4c9db1")
            .topics(["0x12341234"]);
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value["fromBlock"], "0x1");
        assert_eq!(value["toBlock"], "pending");
        assert_eq!(value["topics"], json!(["0x12341234"]));
    }

    #[test]
    fn test_trace_type_wire_names() {
        assert_eq!(serde_json::to_value(TraceType::VmTrace).unwrap(), "vmTrace");
        assert_eq!(serde_json::to_value(TraceType::Trace).unwrap(), "trace");
        assert_eq!(
            serde_json::to_value(TraceType::StateDiff).unwrap(),
            "stateDiff"
        );
    }

    #[test]
    fn test_derivation_serialization() {
        let value = serde_json::to_value(Derivation::hard("0x2547")).unwrap();
        assert_eq!(value, json!({"hash": "0x2547", "type": "hard"}));
        let value = serde_json::to_value(DerivationStep::soft(2)).unwrap();
        assert_eq!(value, json!({"index": 2, "type": "soft"}));
    }

    #[test]
    fn test_message_filter_null_decrypt_key() {
        let filter = MessageFilter::new(["0x5a4ea131"]);
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value["decryptWith"], serde_json::Value::Null);
        assert!(value.get("from").is_none());
    }

    #[test]
    fn test_whisper_post_quantities() {
        let post = WhisperPost::new(["0x776869"], "0x7b2274", 100, 100).to("0x3e245533");
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["priority"], "0x64");
        assert_eq!(value["ttl"], "0x64");
        assert_eq!(value["to"], "0x3e245533");
        assert!(value.get("from").is_none());
    }
}
