//! Parse command implementation.
//!
//! The parse command:
//! 1. Loads log lines (file, stdin or RPC)
//! 2. Reconstructs instruction grouping
//! 3. Writes the JSON report
//! 4. Optionally prints a text tree

use super::models::{LogSource, ParseArgs};
use crate::aggregator::generate_text_summary;
use crate::output::{report_to_string, to_report, write_report};
use crate::parser::{load_log_lines, reconstruct};
use crate::rpc::{validate_signature, RpcClient};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed input
/// * RPC connection failures
/// * File write errors
pub fn execute_parse(args: ParseArgs) -> Result<()> {
    let start_time = Instant::now();

    let source = args
        .source()
        .context("Exactly one of --input or --signature is required")?;

    // Step 1: Load log lines
    info!("Step 1/3: Loading log lines...");
    let (lines, signature) = match source {
        LogSource::File(path) => {
            let lines = load_log_lines(&path)
                .with_context(|| format!("Failed to read logs from {}", path.display()))?;
            (lines, None)
        }
        LogSource::Rpc { rpc_url, signature } => {
            info!("RPC endpoint: {}", rpc_url);
            let lines = fetch_logs(&rpc_url, &signature)?;
            (lines, Some(signature))
        }
    };

    debug!("Loaded {} log lines", lines.len());

    // Step 2: Reconstruct
    info!("Step 2/3: Reconstructing instructions...");
    let logs = reconstruct(&lines);

    // Step 3: Write outputs
    info!("Step 3/3: Writing report...");
    let text_summary = args
        .print_summary
        .then(|| generate_text_summary(&logs, args.max_entries));
    let report = to_report(logs, signature.as_deref());

    info!("{}", report.summary.summary());

    match &args.output_json {
        Some(path) => {
            write_report(&report, path).context("Failed to write report JSON")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => {
            println!("{}", report_to_string(&report)?);
        }
    }

    if let Some(text) = text_summary {
        println!("\n{}", "=".repeat(80));
        println!("LOG SUMMARY");
        println!("{}", "=".repeat(80));
        if let Some(sig) = &report.signature {
            println!("Signature:    {}", sig);
        }
        println!("Instructions: {}", report.summary.instruction_count);
        println!("Inner:        {}", report.summary.inner_instruction_count);
        println!("Entries:      {}", report.summary.entry_count);
        for (program, count) in report.summary.busiest_programs(5) {
            println!("  {:<44} {:>4} invoke(s)", program, count);
        }
        println!("\n{}", text);
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Parse completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Fetch logs from RPC endpoint
///
/// **Private** - internal helper for execute_parse
fn fetch_logs(rpc_url: &str, signature: &str) -> Result<Vec<String>> {
    let client = RpcClient::new(rpc_url).context("Failed to create RPC client")?;

    let logs = client
        .get_transaction_logs(signature)
        .with_context(|| format!("Failed to fetch logs for transaction {}", signature))?;

    Ok(logs)
}

/// Validate parse arguments
///
/// **Public** - can be called before execute_parse for early validation
pub fn validate_args(args: &ParseArgs) -> Result<()> {
    match (&args.input, &args.signature) {
        (None, None) => anyhow::bail!("One of --input or --signature is required"),
        (Some(_), Some(_)) => anyhow::bail!("--input and --signature cannot be combined"),
        (Some(path), None) => {
            if path.as_os_str().is_empty() {
                anyhow::bail!("Input path cannot be empty");
            }
        }
        (None, Some(signature)) => {
            if args.rpc_url.is_empty() {
                anyhow::bail!("RPC URL cannot be empty");
            }

            if !args.rpc_url.starts_with("http://") && !args.rpc_url.starts_with("https://") {
                anyhow::bail!("RPC URL must start with http:// or https://");
            }

            validate_signature(signature.trim())?;
        }
    }

    if args.max_entries == 0 {
        anyhow::bail!("max_entries must be greater than 0");
    }

    Ok(())
}
