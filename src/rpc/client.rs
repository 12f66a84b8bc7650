//! HTTP client for fetching transaction logs from a Solana RPC endpoint.

use super::types::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, TransactionResult};
use crate::utils::config::{DEFAULT_RPC_TIMEOUT, MAX_SIGNATURE_LEN, MIN_SIGNATURE_LEN};
use crate::utils::error::RpcError;
use log::{debug, info, warn};
use reqwest::blocking::Client;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// RPC client for fetching transaction logs
pub struct RpcClient {
    client: Client,
    rpc_url: String,
}

impl RpcClient {
    /// Create a new RPC client
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(DEFAULT_RPC_TIMEOUT)
            .build()
            .map_err(RpcError::RequestFailed)?;

        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
        })
    }

    /// Fetch the runtime log messages of a confirmed transaction
    pub fn get_transaction_logs(&self, signature: &str) -> Result<Vec<String>, RpcError> {
        let signature = signature.trim();

        info!("Fetching logs for transaction: {}", signature);

        let request = JsonRpcRequest::get_transaction(signature, 1);

        debug!("RPC request: {:?}", request);

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .map_err(RpcError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(RpcError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let rpc_response: JsonRpcResponse<TransactionResult> =
            response.json().map_err(RpcError::RequestFailed)?;

        extract_log_messages(rpc_response, signature)
    }
}

/// Pull log messages out of a getTransaction response
///
/// A `null` result means the node does not know the signature.
pub fn extract_log_messages(
    rpc_response: JsonRpcResponse<TransactionResult>,
    signature: &str,
) -> Result<Vec<String>, RpcError> {
    if let Some(error) = rpc_response.error {
        return Err(map_rpc_error(error, signature));
    }

    let transaction = rpc_response
        .result
        .ok_or_else(|| RpcError::TransactionNotFound(signature.to_string()))?;

    let meta = transaction
        .meta
        .ok_or_else(|| RpcError::LogsUnavailable(signature.to_string()))?;

    if meta.err.is_some() {
        warn!("Transaction {} failed on-chain, logs may be truncated", signature);
    }

    let logs = meta
        .log_messages
        .ok_or_else(|| RpcError::LogsUnavailable(signature.to_string()))?;

    debug!("Received {} log lines (slot {})", logs.len(), transaction.slot);

    Ok(logs)
}

/// Check that a signature looks like a base58-encoded 64-byte signature
pub fn validate_signature(signature: &str) -> Result<(), RpcError> {
    let len = signature.len();

    if !(MIN_SIGNATURE_LEN..=MAX_SIGNATURE_LEN).contains(&len) {
        return Err(RpcError::InvalidSignature(format!(
            "must be {}-{} base58 characters, got {}",
            MIN_SIGNATURE_LEN, MAX_SIGNATURE_LEN, len
        )));
    }

    if let Some(c) = signature.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
        return Err(RpcError::InvalidSignature(format!(
            "invalid base58 character '{}'",
            c
        )));
    }

    Ok(())
}

/// Map JSON-RPC error to our error type
fn map_rpc_error(error: JsonRpcError, signature: &str) -> RpcError {
    match error.code {
        -32601 => RpcError::MethodNotSupported,
        // -32009 / -32004 are the node's "slot skipped" / "block not available" codes
        -32004 | -32009 => RpcError::TransactionNotFound(signature.to_string()),
        _ if error.message.to_lowercase().contains("not found") => {
            RpcError::TransactionNotFound(signature.to_string())
        }
        _ => RpcError::InvalidResponse(format!("{}: {}", error.code, error.message)),
    }
}
