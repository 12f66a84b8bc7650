//! Summary statistics and text rendering for reconstructed logs.

use crate::parser::schema::{LogSummary, TransactionLogs};
use log::debug;

/// Count instructions, nested calls, entries and invocations
///
/// **Public** - main entry point for summary calculation
pub fn summarize(logs: &TransactionLogs) -> LogSummary {
    let mut summary = LogSummary {
        instruction_count: logs.len() as u64,
        ..LogSummary::default()
    };

    for buckets in logs.values() {
        for (inner, entries) in buckets {
            if !inner.is_top_level() {
                summary.inner_instruction_count += 1;
            }
            summary.entry_count += entries.len() as u64;

            for entry in entries.iter().filter(|e| e.is_invoke) {
                *summary
                    .invocations
                    .entry(entry.program_id.clone())
                    .or_insert(0) += 1;
            }
        }
    }

    debug!("Summarized logs: {}", summary.summary());

    summary
}

impl LogSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Instructions: {} | Inner: {} | Entries: {} | Programs: {}",
            self.instruction_count,
            self.inner_instruction_count,
            self.entry_count,
            self.invocations.len()
        )
    }

    /// Programs sorted by invocation count (descending, then by id)
    pub fn busiest_programs(&self, top_n: usize) -> Vec<(&str, u64)> {
        let mut programs: Vec<(&str, u64)> = self
            .invocations
            .iter()
            .map(|(id, count)| (id.as_str(), *count))
            .collect();

        programs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        programs.truncate(top_n);
        programs
    }
}

/// Render logs as an indented tree for terminal output
///
/// **Public** - used by the parse command's `--summary` flag
///
/// # Arguments
/// * `logs` - Reconstructed logs
/// * `max_entries` - Maximum entries shown per bucket (rest are elided)
pub fn generate_text_summary(logs: &TransactionLogs, max_entries: usize) -> String {
    let mut lines = Vec::new();

    if logs.is_empty() {
        lines.push("  (no instructions)".to_string());
        return lines.join("\n");
    }

    for (index, buckets) in logs {
        let program = buckets
            .values()
            .flatten()
            .find(|e| e.is_invoke && e.inner_instruction.is_top_level())
            .map(|e| e.program_id.as_str())
            .unwrap_or("?");

        lines.push(format!("Instruction #{} ({})", index, program));

        for (inner, entries) in buckets {
            let indent = if inner.is_top_level() { "  " } else { "    " };
            lines.push(format!("{}[{}]", indent, inner));

            for entry in entries.iter().take(max_entries) {
                lines.push(format!("{}  {}", indent, entry.content));
            }

            if entries.len() > max_entries {
                lines.push(format!(
                    "{}  ... {} more",
                    indent,
                    entries.len() - max_entries
                ));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::reconstruct;

    #[test]
    fn test_summary_line() {
        let logs = reconstruct(["Program A invoke [1]", "Program A success"]);
        let summary = summarize(&logs);

        assert_eq!(
            summary.summary(),
            "Instructions: 1 | Inner: 0 | Entries: 2 | Programs: 1"
        );
    }

    #[test]
    fn test_busiest_programs() {
        let logs = reconstruct([
            "Program A invoke [1]",
            "Program T invoke [2]",
            "Program T success",
            "Program T invoke [2]",
            "Program T success",
            "Program A success",
        ]);
        let summary = summarize(&logs);

        assert_eq!(summary.busiest_programs(1), vec![("T", 2)]);
        assert_eq!(summary.busiest_programs(5), vec![("T", 2), ("A", 1)]);
    }

    #[test]
    fn test_text_summary_elides_long_buckets() {
        let logs = reconstruct([
            "Program A invoke [1]",
            "one",
            "two",
            "three",
            "Program A success",
        ]);

        let text = generate_text_summary(&logs, 2);
        assert!(text.contains("Instruction #0 (A)"));
        assert!(text.contains("  [top-level]"));
        assert!(text.contains("... 3 more"));
        assert!(!text.contains("three"));
    }

    #[test]
    fn test_text_summary_empty() {
        let text = generate_text_summary(&TransactionLogs::new(), 10);
        assert_eq!(text, "  (no instructions)");
    }
}
