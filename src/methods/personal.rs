use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;
use crate::manager::RequestExecutor;
use crate::rpc_abi as rpc;
use crate::types::TxParams;

/// `personal_*` namespace.
///
/// Key storage and signing happen on the node; these calls only forward.
#[derive(Debug)]
pub struct Personal<'a, E> {
    executor: &'a E,
}

impl<'a, E: RequestExecutor> Personal<'a, E> {
    /// Create the namespace over `executor`.
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    fn request(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        debug!("{} with {} params", method, params.len());
        self.executor.request_blocking(method, params)
    }

    /// Address that signed `message` producing `signature`.
    pub fn ec_recover(&self, message: &str, signature: &str) -> Result<Value> {
        self.request(
            rpc::PERSONAL_EC_RECOVER,
            vec![json!(message), json!(signature)],
        )
    }

    /// Import a hex private key into the node's keystore.
    pub fn import_raw_key(&self, private_key: &str, passphrase: &str) -> Result<Value> {
        self.request(
            rpc::PERSONAL_IMPORT_RAW_KEY,
            vec![json!(private_key), json!(passphrase)],
        )
    }

    /// Accounts held by the node's keystore.
    pub fn list_accounts(&self) -> Result<Value> {
        self.request(rpc::PERSONAL_LIST_ACCOUNTS, vec![])
    }

    /// Create a new account protected by `passphrase`.
    pub fn new_account(&self, passphrase: &str) -> Result<Value> {
        self.request(rpc::PERSONAL_NEW_ACCOUNT, vec![json!(passphrase)])
    }

    /// Sign and send `transaction` with the sender's passphrase.
    pub fn send_transaction(&self, transaction: &TxParams, passphrase: &str) -> Result<Value> {
        self.request(
            rpc::PERSONAL_SEND_TRANSACTION,
            vec![Value::Object(transaction.clone()), json!(passphrase)],
        )
    }

    /// Sign `message` with `account`.
    pub fn sign(&self, message: &str, account: &str, passphrase: &str) -> Result<Value> {
        self.request(
            rpc::PERSONAL_SIGN,
            vec![json!(message), json!(account), json!(passphrase)],
        )
    }

    /// Sign EIP-712 typed data.
    pub fn sign_typed_data(
        &self,
        typed_data: &Value,
        account: &str,
        passphrase: &str,
    ) -> Result<Value> {
        self.request(
            rpc::PERSONAL_SIGN_TYPED_DATA,
            vec![typed_data.clone(), json!(account), json!(passphrase)],
        )
    }

    /// Unlock `account`; without `duration` the node applies its own default.
    pub fn unlock_account(
        &self,
        account: &str,
        passphrase: &str,
        duration: Option<u64>,
    ) -> Result<Value> {
        let mut params = vec![json!(account), json!(passphrase)];
        if let Some(duration) = duration {
            params.push(json!(duration));
        }
        self.request(rpc::PERSONAL_UNLOCK_ACCOUNT, params)
    }
}
