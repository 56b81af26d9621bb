use serde::{Deserialize, Serialize};

use super::BlockIdentifier;

/// Output detail requested from replay and trace calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraceMode {
    /// Call trace of the transaction and its subcalls
    Trace,
    /// Full VM execution trace
    VmTrace,
    /// State changes made by the transaction
    StateDiff,
}

/// Modes used when a call does not name any.
pub const DEFAULT_TRACE_MODES: &[TraceMode] = &[TraceMode::Trace];

/// Parameters for `trace_filter`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<Vec<String>>,
    /// Offset into the matching traces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<u64>,
    /// Maximum number of traces returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}
