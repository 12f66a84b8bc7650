//! Log parsing and schema definitions.
//!
//! This module handles:
//! - Loading raw log lines from JSON or plain text
//! - Classifying raw log lines (invoke / success / content)
//! - Reconstructing instruction and inner-instruction grouping
//! - Defining the output schema

pub mod input;
pub mod line;
pub mod reconstruct;
pub mod schema;

// Re-export main types
pub use input::{load_log_lines, parse_log_input};
pub use line::LogLine;
pub use reconstruct::reconstruct;
pub use schema::{InnerInstruction, LogEntry, LogReport, LogSummary, TransactionLogs};
