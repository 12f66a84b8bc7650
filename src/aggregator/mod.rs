//! Aggregation of reconstructed logs into summary statistics.
//!
//! This module transforms reconstructed logs into:
//! - Instruction / inner instruction / entry counts
//! - Per-program invocation counts
//! - A text tree for terminal output

pub mod summary;

// Re-export main functions
pub use summary::{generate_text_summary, summarize};
