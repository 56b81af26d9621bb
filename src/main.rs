//! Parity JSON-RPC client
//!
//! Invokes one namespace method by name against a node and prints the result.
//! Configuration comes from the environment/.env file; flags override it.
//!
//! Usage:
//!   parity-client parity.trace_replay_transaction 0x<hash> '["trace","vmTrace"]'
//!   parity-client --list

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use parity_client::config::Config;
use parity_client::methods::{Parity, METHODS};
use parity_client::types::BlockIdentifier;
use parity_client::RpcManager;

#[derive(Parser, Debug)]
#[command(
    name = "parity-client",
    about = "Call parity_*, trace_* and personal_* JSON-RPC methods",
    version
)]
struct Cli {
    /// Method name, e.g. parity.trace_call or personal.list_accounts
    #[arg(value_name = "METHOD", required_unless_present = "list")]
    method: Option<String>,

    /// Positional arguments; each is parsed as JSON, otherwise taken as a string
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    args: Vec<String>,

    /// Node endpoint (overrides PARITY_RPC_URL)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Default block (overrides PARITY_DEFAULT_BLOCK)
    #[arg(long)]
    default_block: Option<BlockIdentifier>,

    /// Default sender for trace calls (overrides PARITY_DEFAULT_ACCOUNT)
    #[arg(long)]
    default_account: Option<String>,

    /// List every registered method name and exit
    #[arg(long)]
    list: bool,
}

fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .init();

    if cli.list {
        for entry in METHODS {
            match entry.replaced_by {
                Some(replacement) => println!("{} (deprecated, use {})", entry.name, replacement),
                None => println!("{}", entry.name),
            }
        }
        return Ok(());
    }

    let Some(method) = cli.method else {
        bail!("a method name is required");
    };

    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(default_block) = cli.default_block {
        config.default_block = default_block;
    }
    if let Some(default_account) = cli.default_account {
        config.default_account = Some(default_account);
    }

    info!("Node: {}", config.rpc_url);
    debug!("Default block: {}", config.default_block);

    let manager = RpcManager::new(&config.rpc_url)
        .context("Failed to create JSON-RPC executor")?;
    let parity = Parity::with_config(manager, &config);

    let args: Vec<Value> = cli.args.iter().map(|raw| parse_arg(raw)).collect();
    let result = parity
        .call_by_name(&method, &args)
        .with_context(|| format!("{} failed", method))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
