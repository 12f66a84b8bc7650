//! Solana Log Trace
//!
//! Reconstructs the instruction and inner-instruction structure of
//! Solana transaction logs from `invoke [depth]` / `success` markers.
//!
//! This crate provides the core implementation for the
//! `solana-log-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```
//! use solana_log_trace::parser::{reconstruct, InnerInstruction};
//!
//! let logs = reconstruct([
//!     "Program ComputeBudget111111111111111111111111111111 invoke [1]",
//!     "Program ComputeBudget111111111111111111111111111111 success",
//! ]);
//!
//! assert_eq!(logs[&0][&InnerInstruction::TopLevel].len(), 2);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod rpc;
pub mod utils;
