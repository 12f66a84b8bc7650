//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for RPC requests
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Default Solana JSON-RPC endpoint
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Commitment level requested from getTransaction
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Base58 signatures are 64 bytes, which encode to 87 or 88 characters;
// shorter strings only appear for signatures with leading zero bytes
pub const MIN_SIGNATURE_LEN: usize = 64;
pub const MAX_SIGNATURE_LEN: usize = 88;

// Field names for log extraction (RPC responses and explorer exports differ)
pub const LOG_FIELD_NAMES: &[&str] = &["logMessages", "log_messages", "logs"];
