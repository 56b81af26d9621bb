use serde_json::Value;
use thiserror::Error;

/// Result alias used by the executor and the facades.
pub type Result<T, E = RpcError> = std::result::Result<T, E>;

/// Failures surfaced by a request executor or by name-based dispatch.
///
/// The facades never construct the transport variants themselves; whatever the
/// executor returns is handed back to the caller unchanged.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The request could not be sent or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered with a non-success HTTP status.
    #[error("node returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response was not a well-formed JSON-RPC 2.0 response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The node returned a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    /// The runtime backing the blocking executor could not be built.
    #[error("failed to start executor runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// Positional arguments given to a method by name did not fit its inputs.
    #[error("invalid arguments for {method}: {reason}")]
    InvalidArguments { method: String, reason: String },
}

impl RpcError {
    pub(crate) fn invalid_arguments(method: &str, reason: impl ToString) -> Self {
        Self::InvalidArguments {
            method: method.to_string(),
            reason: reason.to_string(),
        }
    }
}
