//! Parity JSON-RPC client
//!
//! This crate exposes the Parity/OpenEthereum `parity_*`, `trace_*` and
//! `personal_*` JSON-RPC namespaces as typed Rust methods. Each method turns
//! its arguments into a method name and an ordered parameter list, fills in
//! defaults (block identifier, trace modes, `from` of traced calls) and hands
//! the request to a blocking executor. Results are returned untouched.
//!
//! # Architecture
//!
//! ```text
//! Caller (library user or CLI)
//!     |
//!     | typed calls / names from the method registry
//!     v
//! Parity / Personal namespaces (this crate)
//!     |
//!     | request_blocking(method, params)
//!     v
//! RequestExecutor (RpcManager: JSON-RPC 2.0 over HTTP)
//!     |
//!     v
//! Node
//! ```
//!
//! # Modules
//!
//! - `config` - Environment and configuration management
//! - `manager` - Executor trait and the HTTP JSON-RPC executor
//! - `methods` - Namespaces and the name-based method registry
//! - `types` - Block identifiers, trace modes and other call parameters
//! - `address` - EIP-55 checksum helpers
//! - `rpc_abi` - JSON-RPC method names

pub mod address;
pub mod config;
pub mod error;
pub mod manager;
pub mod methods;
pub mod rpc_abi;
pub mod types;

pub use error::{Result, RpcError};
pub use manager::{RequestExecutor, RpcManager};
pub use methods::{Parity, Personal};
