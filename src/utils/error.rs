//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Log reconstruction itself has no error type: every input sequence
//! produces a (possibly empty) mapping.

use thiserror::Error;

/// Errors that can occur during RPC communication
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Transaction {0} has no log messages")]
    LogsUnavailable(String),

    #[error("Invalid transaction signature: {0}")]
    InvalidSignature(String),

    #[error("getTransaction not supported by this RPC endpoint")]
    MethodNotSupported,
}

/// Errors that can occur while loading raw log lines
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid log input: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
