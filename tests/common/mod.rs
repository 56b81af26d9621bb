#![allow(dead_code)]

use std::sync::Mutex;

use parity_client::{RequestExecutor, Result, RpcError};
use serde_json::{json, Value};

/// One request seen by an executor.
pub type Call = (String, Vec<Value>);

/// Records every request and answers with `{"method": <name>}`.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<Call>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The single request made so far.
    pub fn only_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one request, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl RequestExecutor for RecordingExecutor {
    fn request_blocking(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        Ok(json!({ "method": method }))
    }
}

/// Fails every request with a node-side error.
#[derive(Debug, Default)]
pub struct FailingExecutor;

impl RequestExecutor for FailingExecutor {
    fn request_blocking(&self, method: &str, _params: Vec<Value>) -> Result<Value> {
        Err(RpcError::Rpc {
            code: -32000,
            message: format!("{method} unavailable"),
            data: Some(json!({ "reason": "test" })),
        })
    }
}

pub const CHECKSUM_ACCOUNT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const LOWERCASE_ACCOUNT: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
pub const OTHER_ACCOUNT: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

pub fn hash(byte: u8) -> alloy_primitives::B256 {
    alloy_primitives::B256::repeat_byte(byte)
}

pub fn hash_hex(byte: u8) -> String {
    format!("0x{}", hex::encode([byte; 32]))
}
