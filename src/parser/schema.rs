//! Data types for reconstructed transaction logs and the JSON report.
//!
//! The report is versioned so downstream tooling can detect format changes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Instruction index -> inner instruction -> entries in input order
pub type TransactionLogs = BTreeMap<u32, BTreeMap<InnerInstruction, Vec<LogEntry>>>;

/// Position of a log line within its top-level instruction
///
/// Serialized as a signed integer: `-1` for top-level content,
/// `0, 1, 2, ...` for nested calls in the order they were opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InnerInstruction {
    /// Content of the top-level instruction itself
    TopLevel,
    /// The n-th nested call opened within the instruction
    Nested(u32),
}

impl InnerInstruction {
    /// Wire representation (`-1` for top-level)
    pub fn as_index(self) -> i64 {
        match self {
            InnerInstruction::TopLevel => -1,
            InnerInstruction::Nested(n) => i64::from(n),
        }
    }

    /// Inverse of [`as_index`](Self::as_index); `None` for values below `-1`
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            -1 => Some(InnerInstruction::TopLevel),
            n => u32::try_from(n).ok().map(InnerInstruction::Nested),
        }
    }

    pub fn is_top_level(self) -> bool {
        self == InnerInstruction::TopLevel
    }
}

impl fmt::Display for InnerInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InnerInstruction::TopLevel => write!(f, "top-level"),
            InnerInstruction::Nested(n) => write!(f, "inner #{}", n),
        }
    }
}

impl Serialize for InnerInstruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_index())
    }
}

impl<'de> Deserialize<'de> for InnerInstruction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = i64::deserialize(deserializer)?;
        InnerInstruction::from_index(index).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid inner instruction index: {}", index))
        })
    }
}

/// A single classified log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Trimmed log text
    pub content: String,

    /// Program the line belongs to (empty when not determinable)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub program_id: String,

    pub is_invoke: bool,

    pub is_success: bool,

    /// Same value as the bucket key, kept on the entry for convenience
    pub inner_instruction: InnerInstruction,
}

impl LogEntry {
    pub fn invoke(content: &str, program_id: &str, inner: InnerInstruction) -> Self {
        Self {
            content: content.to_string(),
            program_id: program_id.to_string(),
            is_invoke: true,
            is_success: false,
            inner_instruction: inner,
        }
    }

    pub fn success(content: &str, program_id: &str, inner: InnerInstruction) -> Self {
        Self {
            content: content.to_string(),
            program_id: program_id.to_string(),
            is_invoke: false,
            is_success: true,
            inner_instruction: inner,
        }
    }

    pub fn content(content: &str, program_id: &str, inner: InnerInstruction) -> Self {
        Self {
            content: content.to_string(),
            program_id: program_id.to_string(),
            is_invoke: false,
            is_success: false,
            inner_instruction: inner,
        }
    }
}

/// Counts over a reconstruction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSummary {
    /// Number of top-level instructions
    pub instruction_count: u64,

    /// Number of nested call buckets across all instructions
    pub inner_instruction_count: u64,

    /// Number of classified entries
    pub entry_count: u64,

    /// Invoke markers seen per program id
    pub invocations: BTreeMap<String, u64>,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Transaction signature, when the logs were fetched over RPC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    pub summary: LogSummary,

    /// Reconstructed instruction mapping
    pub instructions: TransactionLogs,

    /// Timestamp when the report was generated
    pub generated_at: String,
}
