use anyhow::{Context, Result};
use std::env;

use crate::types::BlockIdentifier;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Node JSON-RPC endpoint URL
    pub rpc_url: String,
    /// Block used when a call omits one
    pub default_block: BlockIdentifier,
    /// Sender filled into `trace_call` transactions that have no `from`
    pub default_account: Option<String>,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            default_block: BlockIdentifier::Latest,
            default_account: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    /// Call dotenvy::dotenv() before calling this.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let rpc_url = env::var("PARITY_RPC_URL").unwrap_or(defaults.rpc_url);

        let default_block = match non_empty_var("PARITY_DEFAULT_BLOCK") {
            Some(value) => value
                .parse()
                .context("PARITY_DEFAULT_BLOCK must be a block tag, number or hash")?,
            None => defaults.default_block,
        };

        let default_account = non_empty_var("PARITY_DEFAULT_ACCOUNT");

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);

        Ok(Config {
            rpc_url,
            default_block,
            default_account,
            log_level,
        })
    }
}

/// Read a variable, treating an empty value as unset.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
