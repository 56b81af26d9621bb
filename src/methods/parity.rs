use alloy_primitives::B256;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::address::is_checksum_address;
use crate::config::Config;
use crate::error::Result;
use crate::manager::RequestExecutor;
use crate::methods::personal::Personal;
use crate::rpc_abi as rpc;
use crate::types::{
    BlockIdentifier, FilterParams, ParityMode, TraceMode, TxParams, DEFAULT_TRACE_MODES,
};

/// `parity_*` and `trace_*` namespace.
///
/// Every call builds the method's positional parameters, fills in defaults and
/// hands them to the executor. Results and errors come back exactly as the
/// executor returned them.
#[derive(Debug, Clone)]
pub struct Parity<E> {
    executor: E,
    default_block: BlockIdentifier,
    default_account: Option<String>,
}

impl<E: RequestExecutor> Parity<E> {
    /// Create a namespace with `latest` as default block and no default account.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            default_block: BlockIdentifier::Latest,
            default_account: None,
        }
    }

    /// Create a namespace using the defaults from `config`.
    pub fn with_config(executor: E, config: &Config) -> Self {
        Self {
            executor,
            default_block: config.default_block,
            default_account: config.default_account.clone(),
        }
    }

    /// Replace the block used when a call omits one.
    pub fn with_default_block(mut self, block: BlockIdentifier) -> Self {
        self.default_block = block;
        self
    }

    /// Set the sender filled into `trace_call` transactions without `from`.
    pub fn with_default_account(mut self, account: impl Into<String>) -> Self {
        self.default_account = Some(account.into());
        self
    }

    /// Block used when a call omits its block identifier.
    pub fn default_block(&self) -> BlockIdentifier {
        self.default_block
    }

    /// Same value as [`Parity::default_block`], with a deprecation warning on every read.
    #[deprecated(note = "use `default_block` instead")]
    pub fn legacy_default_block(&self) -> BlockIdentifier {
        warn!("defaultBlock is deprecated in favor of default_block");
        self.default_block
    }

    /// Account used as `from` by `trace_call`, if any.
    pub fn default_account(&self) -> Option<&str> {
        self.default_account.as_deref()
    }

    /// `personal_*` namespace sharing this executor.
    pub fn personal(&self) -> Personal<'_, E> {
        Personal::new(&self.executor)
    }

    fn request(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        debug!("{} with {} params", method, params.len());
        self.executor.request_blocking(method, params)
    }

    /// Enode URI of the node.
    pub fn enode(&self) -> Result<Value> {
        self.request(rpc::PARITY_ENODE, vec![])
    }

    /// Up to `quantity` storage keys of `address`, starting after `hash`.
    pub fn list_storage_keys(
        &self,
        address: &str,
        quantity: u64,
        hash: B256,
        block_identifier: Option<BlockIdentifier>,
    ) -> Result<Value> {
        let block = block_identifier.unwrap_or(self.default_block);
        self.request(
            rpc::PARITY_LIST_STORAGE_KEYS,
            vec![json!(address), json!(quantity), json!(hash), json!(block)],
        )
    }

    /// Connected peers of the node.
    pub fn net_peers(&self) -> Result<Value> {
        self.request(rpc::PARITY_NET_PEERS, vec![])
    }

    /// Add `url` to the node's reserved peers.
    pub fn add_reserved_peer(&self, url: &str) -> Result<Value> {
        self.request(rpc::PARITY_ADD_RESERVED_PEER, vec![json!(url)])
    }

    /// Replay a mined transaction and return the requested traces.
    pub fn trace_replay_transaction(
        &self,
        transaction_hash: B256,
        mode: Option<&[TraceMode]>,
    ) -> Result<Value> {
        let mode = mode.unwrap_or(DEFAULT_TRACE_MODES);
        self.request(
            rpc::TRACE_REPLAY_TRANSACTION,
            vec![json!(transaction_hash), json!(mode)],
        )
    }

    /// Replay every transaction of a block.
    pub fn trace_replay_block_transactions(
        &self,
        block_identifier: BlockIdentifier,
        mode: Option<&[TraceMode]>,
    ) -> Result<Value> {
        let mode = mode.unwrap_or(DEFAULT_TRACE_MODES);
        self.request(
            rpc::TRACE_REPLAY_BLOCK_TRANSACTIONS,
            vec![json!(block_identifier), json!(mode)],
        )
    }

    /// Traces of all transactions in a block.
    pub fn trace_block(&self, block_identifier: BlockIdentifier) -> Result<Value> {
        self.request(rpc::TRACE_BLOCK, vec![json!(block_identifier)])
    }

    /// Traces matching `params`.
    pub fn trace_filter(&self, params: &FilterParams) -> Result<Value> {
        self.request(rpc::TRACE_FILTER, vec![json!(params)])
    }

    /// Traces of one transaction.
    pub fn trace_transaction(&self, transaction_hash: B256) -> Result<Value> {
        self.request(rpc::TRACE_TRANSACTION, vec![json!(transaction_hash)])
    }

    /// Trace a call without sending it.
    ///
    /// A transaction without `from` is sent with the default account as sender,
    /// provided that account is a valid checksum address. The caller's map is
    /// never modified.
    pub fn trace_call(
        &self,
        transaction: &TxParams,
        mode: Option<&[TraceMode]>,
        block_identifier: Option<BlockIdentifier>,
    ) -> Result<Value> {
        let transaction = self.fill_default_sender(transaction);
        let mode = mode.unwrap_or(DEFAULT_TRACE_MODES);
        let block = block_identifier.unwrap_or(self.default_block);
        self.request(
            rpc::TRACE_CALL,
            vec![Value::Object(transaction), json!(mode), json!(block)],
        )
    }

    /// Trace a signed transaction without broadcasting it.
    pub fn trace_raw_transaction(
        &self,
        raw_transaction: &str,
        mode: Option<&[TraceMode]>,
    ) -> Result<Value> {
        let mode = mode.unwrap_or(DEFAULT_TRACE_MODES);
        self.request(
            rpc::TRACE_RAW_TRANSACTION,
            vec![json!(raw_transaction), json!(mode)],
        )
    }

    /// Switch the node's operating mode.
    pub fn set_mode(&self, mode: ParityMode) -> Result<Value> {
        self.request(rpc::PARITY_SET_MODE, vec![json!(mode)])
    }

    /// Current operating mode of the node.
    pub fn mode(&self) -> Result<Value> {
        self.request(rpc::PARITY_MODE, vec![])
    }

    fn fill_default_sender(&self, transaction: &TxParams) -> TxParams {
        let mut filled = transaction.clone();
        if filled.contains_key("from") {
            return filled;
        }
        match self.default_account.as_deref() {
            Some(account) if is_checksum_address(account) => {
                filled.insert("from".to_string(), Value::String(account.to_string()));
            }
            _ => {}
        }
        filled
    }
}
