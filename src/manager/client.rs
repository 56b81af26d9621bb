use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, error};

use super::types::{JsonRpcRequest, JsonRpcResponse};
use crate::error::{Result, RpcError};

/// Executes one JSON-RPC request and blocks until the node has answered.
///
/// This is the only seam the facades depend on. Implementations own the
/// transport, serialization and error classification; callers receive the
/// `result` member of the response untouched.
pub trait RequestExecutor: Send + Sync {
    fn request_blocking(&self, method: &str, params: Vec<Value>) -> Result<Value>;
}

impl<T: RequestExecutor + ?Sized> RequestExecutor for &T {
    fn request_blocking(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        (**self).request_blocking(method, params)
    }
}

impl<T: RequestExecutor + ?Sized> RequestExecutor for Arc<T> {
    fn request_blocking(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        (**self).request_blocking(method, params)
    }
}

impl<T: RequestExecutor + ?Sized> RequestExecutor for Box<T> {
    fn request_blocking(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        (**self).request_blocking(method, params)
    }
}

/// JSON-RPC over HTTP executor.
///
/// Requests go out through an async reqwest client driven by a runtime owned by
/// the manager, so `request_blocking` must not be called (and the manager must
/// not be dropped) from inside another async runtime.
#[derive(Debug)]
pub struct RpcManager {
    http_client: Client,
    rpc_url: String,
    runtime: Runtime,
    next_id: AtomicU64,
}

impl RpcManager {
    /// Create a new manager for the given node endpoint.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("parity-rpc")
            .enable_all()
            .build()?;

        Ok(Self {
            http_client: Client::new(),
            rpc_url: rpc_url.to_string(),
            runtime,
            next_id: AtomicU64::new(1),
        })
    }

    /// Get the node endpoint.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Send a JSON-RPC request to the node and return its `result` member.
    pub async fn send_request(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);
        debug!("Sending JSON-RPC request: method={}, id={}", method, id);

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Node returned HTTP {} for {}: {}", status, method, body);
            return Err(RpcError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let rpc_response: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Malformed response to {}: {}", method, e);
            RpcError::InvalidResponse(format!("{method}: {e}"))
        })?;

        if let Some(err) = rpc_response.error {
            error!(
                "JSON-RPC error for {}: code={}, message={}",
                method, err.code, err.message
            );
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
                data: err.data,
            });
        }

        rpc_response.result.ok_or_else(|| {
            RpcError::InvalidResponse(format!("{method}: response has neither result nor error"))
        })
    }
}

impl RequestExecutor for RpcManager {
    fn request_blocking(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        self.runtime.block_on(self.send_request(method, params))
    }
}
