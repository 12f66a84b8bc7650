//! Types for JSON-RPC communication with a Solana node.
//!
//! Only the parts of the `getTransaction` response needed to recover
//! log messages are modelled; everything else is ignored.

use crate::utils::config::DEFAULT_COMMITMENT;
use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: u64,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request for getTransaction
    ///
    /// # Arguments
    /// * `signature` - Base58 transaction signature
    /// * `id` - Request ID (for response correlation)
    pub fn get_transaction(signature: &str, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: "getTransaction".to_string(),
            params: serde_json::json!([
                signature,
                {
                    "encoding": "json",
                    "maxSupportedTransactionVersion": 0,
                    "commitment": DEFAULT_COMMITMENT
                }
            ]),
            id,
        }
    }
}

/// JSON-RPC 2.0 response structure
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    pub id: u64,
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Confirmed transaction as returned by getTransaction
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionResult {
    #[serde(default)]
    pub slot: u64,

    #[serde(default)]
    pub meta: Option<TransactionMeta>,
}

/// Transaction status metadata
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionMeta {
    /// Runtime log lines; absent when the node has log recording disabled
    #[serde(default, rename = "logMessages")]
    pub log_messages: Option<Vec<String>>,

    #[serde(default)]
    pub err: Option<serde_json::Value>,
}
