//! Value types passed through the facades.

pub mod block;
pub mod trace;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use block::{BlockIdentifier, InvalidBlockIdentifier};
pub use trace::{FilterParams, TraceMode, DEFAULT_TRACE_MODES};

/// Named transaction fields (`from`, `to`, `gas`, `data`, ...)
pub type TxParams = Map<String, Value>;

/// Node operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParityMode {
    /// Continuously sync and keep peers connected
    Active,
    /// Sync only when there is activity
    Passive,
    /// Sync only when the RPC is in use
    Dark,
    /// No networking
    Offline,
}
