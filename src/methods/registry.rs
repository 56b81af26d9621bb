//! Name-based access to the namespaces.
//!
//! Every operation is reachable under its snake_case name. The personal
//! operations and the default block accessor are also reachable, for backward
//! compatibility, under the camelCase names older clients used. Both spellings
//! resolve to the same [`Operation`], so the request sent to the node is identical.

use alloy_primitives::B256;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::{Result, RpcError};
use crate::manager::RequestExecutor;
use crate::methods::parity::Parity;
use crate::types::{BlockIdentifier, FilterParams, ParityMode, TraceMode, TxParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DefaultBlock,
    Enode,
    ListStorageKeys,
    NetPeers,
    AddReservedPeer,
    TraceReplayTransaction,
    TraceReplayBlockTransactions,
    TraceBlock,
    TraceFilter,
    TraceTransaction,
    TraceCall,
    TraceRawTransaction,
    SetMode,
    Mode,
    EcRecover,
    ImportRawKey,
    ListAccounts,
    NewAccount,
    SendTransaction,
    Sign,
    SignTypedData,
    UnlockAccount,
}

impl Operation {
    /// Maximum number of positional arguments.
    const fn arity(self) -> usize {
        match self {
            Self::DefaultBlock
            | Self::Enode
            | Self::NetPeers
            | Self::Mode
            | Self::ListAccounts => 0,
            Self::AddReservedPeer
            | Self::TraceBlock
            | Self::TraceFilter
            | Self::TraceTransaction
            | Self::SetMode
            | Self::NewAccount => 1,
            Self::TraceReplayTransaction
            | Self::TraceReplayBlockTransactions
            | Self::TraceRawTransaction
            | Self::EcRecover
            | Self::ImportRawKey
            | Self::SendTransaction => 2,
            Self::TraceCall | Self::Sign | Self::SignTypedData | Self::UnlockAccount => 3,
            Self::ListStorageKeys => 4,
        }
    }
}

/// One registered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodEntry {
    pub name: &'static str,
    pub operation: Operation,
    /// Set for legacy names: the name that should be used instead.
    pub replaced_by: Option<&'static str>,
}

const fn primary(name: &'static str, operation: Operation) -> MethodEntry {
    MethodEntry {
        name,
        operation,
        replaced_by: None,
    }
}

const fn legacy(name: &'static str, operation: Operation, replaced_by: &'static str) -> MethodEntry {
    MethodEntry {
        name,
        operation,
        replaced_by: Some(replaced_by),
    }
}

pub static METHODS: &[MethodEntry] = &[
    primary("parity.default_block", Operation::DefaultBlock),
    primary("parity.enode", Operation::Enode),
    primary("parity.list_storage_keys", Operation::ListStorageKeys),
    primary("parity.net_peers", Operation::NetPeers),
    primary("parity.add_reserved_peer", Operation::AddReservedPeer),
    primary("parity.trace_replay_transaction", Operation::TraceReplayTransaction),
    primary(
        "parity.trace_replay_block_transactions",
        Operation::TraceReplayBlockTransactions,
    ),
    primary("parity.trace_block", Operation::TraceBlock),
    primary("parity.trace_filter", Operation::TraceFilter),
    primary("parity.trace_transaction", Operation::TraceTransaction),
    primary("parity.trace_call", Operation::TraceCall),
    primary("parity.trace_raw_transaction", Operation::TraceRawTransaction),
    primary("parity.set_mode", Operation::SetMode),
    primary("parity.mode", Operation::Mode),
    primary("personal.ec_recover", Operation::EcRecover),
    primary("personal.import_raw_key", Operation::ImportRawKey),
    primary("personal.list_accounts", Operation::ListAccounts),
    primary("personal.new_account", Operation::NewAccount),
    primary("personal.send_transaction", Operation::SendTransaction),
    primary("personal.sign", Operation::Sign),
    primary("personal.sign_typed_data", Operation::SignTypedData),
    primary("personal.unlock_account", Operation::UnlockAccount),
    legacy("parity.defaultBlock", Operation::DefaultBlock, "parity.default_block"),
    legacy("personal.ecRecover", Operation::EcRecover, "personal.ec_recover"),
    legacy("personal.importRawKey", Operation::ImportRawKey, "personal.import_raw_key"),
    legacy("personal.listAccounts", Operation::ListAccounts, "personal.list_accounts"),
    legacy("personal.newAccount", Operation::NewAccount, "personal.new_account"),
    legacy("personal.sendTransaction", Operation::SendTransaction, "personal.send_transaction"),
    legacy("personal.signTypedData", Operation::SignTypedData, "personal.sign_typed_data"),
    legacy("personal.unlockAccount", Operation::UnlockAccount, "personal.unlock_account"),
];

/// Resolve a primary or legacy name.
pub fn lookup(name: &str) -> Option<&'static MethodEntry> {
    METHODS.iter().find(|entry| entry.name == name)
}

/// Positional arguments of one call, decoded on demand.
struct Args<'a> {
    method: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn new(method: &'a str, values: &'a [Value], arity: usize) -> Result<Self> {
        if values.len() > arity {
            return Err(RpcError::invalid_arguments(
                method,
                format!("expected at most {arity} arguments, got {}", values.len()),
            ));
        }
        Ok(Self { method, values })
    }

    fn required<T: DeserializeOwned>(&self, index: usize) -> Result<T> {
        match self.values.get(index) {
            Some(value) => self.decode(index, value),
            None => Err(RpcError::invalid_arguments(
                self.method,
                format!("missing argument {index}"),
            )),
        }
    }

    /// String argument; numbers and booleans are taken in their textual form so
    /// that a passphrase like `1234` survives JSON parsing on the command line.
    fn text(&self, index: usize) -> Result<String> {
        match self.values.get(index) {
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            _ => self.required(index),
        }
    }

    /// Missing and `null` arguments both mean "use the default".
    fn optional<T: DeserializeOwned>(&self, index: usize) -> Result<Option<T>> {
        match self.values.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.decode(index, value).map(Some),
        }
    }

    fn decode<T: DeserializeOwned>(&self, index: usize, value: &Value) -> Result<T> {
        T::deserialize(value).map_err(|e| {
            RpcError::invalid_arguments(self.method, format!("argument {index}: {e}"))
        })
    }
}

impl<E: RequestExecutor> Parity<E> {
    /// Invoke an operation by registered name with positional JSON arguments.
    ///
    /// Legacy names log a deprecation warning and then behave exactly like
    /// their replacement.
    pub fn call_by_name(&self, name: &str, args: &[Value]) -> Result<Value> {
        let entry = lookup(name).ok_or_else(|| RpcError::UnknownMethod(name.to_string()))?;
        if let Some(replacement) = entry.replaced_by {
            warn!("{} is deprecated in favor of {}", name, replacement);
        }

        let args = Args::new(name, args, entry.operation.arity())?;
        let personal = self.personal();

        match entry.operation {
            Operation::DefaultBlock => Ok(Value::String(self.default_block().to_string())),
            Operation::Enode => self.enode(),
            Operation::ListStorageKeys => self.list_storage_keys(
                &args.text(0)?,
                args.required(1)?,
                args.required::<B256>(2)?,
                args.optional(3)?,
            ),
            Operation::NetPeers => self.net_peers(),
            Operation::AddReservedPeer => self.add_reserved_peer(&args.text(0)?),
            Operation::TraceReplayTransaction => {
                let mode = args.optional::<Vec<TraceMode>>(1)?;
                self.trace_replay_transaction(args.required(0)?, mode.as_deref())
            }
            Operation::TraceReplayBlockTransactions => {
                let mode = args.optional::<Vec<TraceMode>>(1)?;
                self.trace_replay_block_transactions(args.required(0)?, mode.as_deref())
            }
            Operation::TraceBlock => self.trace_block(args.required::<BlockIdentifier>(0)?),
            Operation::TraceFilter => self.trace_filter(&args.required::<FilterParams>(0)?),
            Operation::TraceTransaction => self.trace_transaction(args.required(0)?),
            Operation::TraceCall => {
                let transaction = args.required::<TxParams>(0)?;
                let mode = args.optional::<Vec<TraceMode>>(1)?;
                self.trace_call(&transaction, mode.as_deref(), args.optional(2)?)
            }
            Operation::TraceRawTransaction => {
                let mode = args.optional::<Vec<TraceMode>>(1)?;
                self.trace_raw_transaction(&args.text(0)?, mode.as_deref())
            }
            Operation::SetMode => self.set_mode(args.required::<ParityMode>(0)?),
            Operation::Mode => self.mode(),
            Operation::EcRecover => personal.ec_recover(
                &args.text(0)?,
                &args.text(1)?,
            ),
            Operation::ImportRawKey => personal.import_raw_key(
                &args.text(0)?,
                &args.text(1)?,
            ),
            Operation::ListAccounts => personal.list_accounts(),
            Operation::NewAccount => personal.new_account(&args.text(0)?),
            Operation::SendTransaction => personal.send_transaction(
                &args.required::<TxParams>(0)?,
                &args.text(1)?,
            ),
            Operation::Sign => personal.sign(
                &args.text(0)?,
                &args.text(1)?,
                &args.text(2)?,
            ),
            Operation::SignTypedData => personal.sign_typed_data(
                &args.required::<Value>(0)?,
                &args.text(1)?,
                &args.text(2)?,
            ),
            Operation::UnlockAccount => personal.unlock_account(
                &args.text(0)?,
                &args.text(1)?,
                args.optional(2)?,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = METHODS.iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), METHODS.len());
    }

    #[test]
    fn test_legacy_names_point_at_primary_names() {
        for entry in METHODS.iter().filter(|entry| entry.replaced_by.is_some()) {
            let replacement = lookup(entry.replaced_by.unwrap()).unwrap();
            assert_eq!(replacement.operation, entry.operation, "{}", entry.name);
            assert!(replacement.replaced_by.is_none(), "{}", entry.name);
        }
    }

    #[test]
    fn test_every_operation_has_a_primary_name() {
        let primaries: HashSet<_> = METHODS
            .iter()
            .filter(|entry| entry.replaced_by.is_none())
            .map(|entry| entry.operation)
            .collect();
        let all: HashSet<_> = METHODS.iter().map(|entry| entry.operation).collect();
        assert_eq!(primaries, all);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("parity.trace_call").unwrap().operation, Operation::TraceCall);
        assert_eq!(
            lookup("personal.signTypedData").unwrap().operation,
            Operation::SignTypedData
        );
        assert!(lookup("trace_call").is_none());
        assert!(lookup("parity.traceCall").is_none());
    }
}
