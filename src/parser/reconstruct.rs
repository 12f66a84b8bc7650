//! Reconstruct instruction nesting from runtime log lines.
//!
//! Call depth alone does not say which instruction or nested call a line
//! belongs to, so the scan simulates the runtime call stack:
//! invoke markers push a frame, success markers pop back to the matching
//! frame, and content lines are attributed to whatever frame is on top.

use super::line::LogLine;
use super::schema::{InnerInstruction, LogEntry, TransactionLogs};
use log::{debug, warn};

/// An open call recorded during the scan
#[derive(Debug, Clone)]
struct CallFrame {
    program_id: String,
    depth: u32,
    instruction: u32,
    inner: InnerInstruction,
}

/// Scan state threaded through the input
#[derive(Debug, Default)]
struct Reconstructor {
    logs: TransactionLogs,
    stack: Vec<CallFrame>,
    /// `None` until the first depth-1 invoke
    instruction: Option<u32>,
    /// `None` until the first nested invoke of the current instruction
    inner: Option<u32>,
}

/// Group log lines by instruction and inner instruction
///
/// **Public** - main entry point for reconstruction
///
/// # Arguments
/// * `lines` - Log lines in emission order
///
/// # Returns
/// Mapping of instruction index to inner instruction to entries. Lines that
/// cannot be attributed (blank lines, a success with no open call, anything
/// before the first top-level invoke) produce no entry.
///
/// # Example
/// ```
/// use solana_log_trace::parser::{reconstruct, InnerInstruction};
///
/// let logs = reconstruct([
///     "Program A invoke [1]",
///     "Program B invoke [2]",
///     "Program B success",
///     "Program A success",
/// ]);
///
/// assert_eq!(logs[&0][&InnerInstruction::TopLevel].len(), 2);
/// assert_eq!(logs[&0][&InnerInstruction::Nested(0)].len(), 2);
/// ```
pub fn reconstruct<I, S>(lines: I) -> TransactionLogs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = Reconstructor::default();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        match LogLine::parse(line) {
            LogLine::Invoke { program_id, depth } => state.invoke(line, program_id, depth),
            LogLine::Success { program_id } => state.success(line, program_id),
            LogLine::Content => state.content(line),
        }
    }

    state.finish()
}

impl Reconstructor {
    fn invoke(&mut self, line: &str, program_id: &str, depth: u32) {
        if depth == 0 {
            warn!("Invoke of {} with depth 0, treating as nested", program_id);
        }

        let inner = if depth == 1 {
            let next = self.instruction.map_or(0, |i| i.saturating_add(1));
            self.instruction = Some(next);
            self.inner = None;
            self.logs.entry(next).or_default();
            InnerInstruction::TopLevel
        } else {
            let next = self.inner.map_or(0, |i| i.saturating_add(1));
            self.inner = Some(next);
            InnerInstruction::Nested(next)
        };

        // No frame either, so a matching success is dropped as dangling
        let Some(instruction) = self.instruction else {
            debug!("Dropping invoke of {} outside any instruction", program_id);
            return;
        };

        self.push_entry(instruction, LogEntry::invoke(line, program_id, inner));
        self.stack.push(CallFrame {
            program_id: program_id.to_string(),
            depth,
            instruction,
            inner,
        });
    }

    fn success(&mut self, line: &str, program_id: &str) {
        let Some(position) = self
            .stack
            .iter()
            .rposition(|frame| frame.program_id == program_id)
        else {
            debug!("Dropping success of {} with no open invoke", program_id);
            return;
        };

        let frame = &self.stack[position];
        let entry = LogEntry::success(line, program_id, frame.inner);
        let instruction = frame.instruction;

        if position + 1 < self.stack.len() {
            debug!(
                "Success of {} closes {} frame(s) above it",
                program_id,
                self.stack.len() - position - 1
            );
        }

        self.push_entry(instruction, entry);
        self.stack.truncate(position);
    }

    fn content(&mut self, line: &str) {
        let (instruction, program_id, inner) = match self.stack.last() {
            Some(frame) => (frame.instruction, frame.program_id.as_str(), frame.inner),
            None => match self.instruction {
                Some(instruction) => (instruction, "", InnerInstruction::TopLevel),
                None => {
                    debug!("Dropping log line before first instruction: {}", line);
                    return;
                }
            },
        };

        let entry = LogEntry::content(line, program_id, inner);
        self.push_entry(instruction, entry);
    }

    fn push_entry(&mut self, instruction: u32, entry: LogEntry) {
        self.logs
            .entry(instruction)
            .or_default()
            .entry(entry.inner_instruction)
            .or_default()
            .push(entry);
    }

    fn finish(self) -> TransactionLogs {
        for frame in &self.stack {
            debug!(
                "Unclosed invoke of {} at depth {} (instruction {}, {})",
                frame.program_id, frame.depth, frame.instruction, frame.inner
            );
        }

        self.logs
    }
}
