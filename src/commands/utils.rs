use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    if let Some(signature) = &report.signature {
        println!("  Signature: {}", signature);
    }
    println!("  Instructions: {}", report.summary.instruction_count);
    println!("  Inner Instructions: {}", report.summary.inner_instruction_count);
    println!("  Entries: {}", report.summary.entry_count);
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Solana Log Trace Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  signature: string?         - Transaction signature (RPC input only)");
        println!("  summary: object            - Reconstruction statistics");
        println!("    instruction_count: number");
        println!("    inner_instruction_count: number");
        println!("    entry_count: number");
        println!("    invocations: object      - Invoke count by program id");
        println!("  instructions: object       - Instruction index -> inner index -> entries");
        println!("    (inner index -1 is the top-level instruction itself)");
        println!("    content: string          - Trimmed log line");
        println!("    program_id: string?      - Owning program, omitted when unknown");
        println!("    is_invoke: bool");
        println!("    is_success: bool");
        println!("    inner_instruction: number");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Solana Log Trace v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Reconstructs instruction and inner-instruction structure from Solana transaction logs.");
}
