//! RPC client for fetching transaction logs from Solana nodes.

pub mod client;
pub mod types;

// Re-export main types
pub use client::{validate_signature, RpcClient};
