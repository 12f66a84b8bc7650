//! Solana Log Trace CLI
//!
//! Groups Solana transaction log lines by instruction and inner instruction.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use solana_log_trace::commands::{
    display_schema, display_version, execute_parse, validate_args, validate_report_file,
    ParseArgs,
};
use solana_log_trace::utils::config::DEFAULT_RPC_URL;

/// Solana Log Trace - instruction-level grouping of transaction logs
#[derive(Parser, Debug)]
#[command(name = "solana-log-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconstruct instruction grouping from transaction logs
    Parse {
        /// Log file (JSON array, getTransaction JSON, or plain text); `-` for stdin
        #[arg(short, long, conflicts_with = "signature")]
        input: Option<PathBuf>,

        /// Transaction signature to fetch over RPC
        #[arg(short, long)]
        signature: Option<String>,

        /// RPC endpoint URL
        #[arg(short, long, env = "SOLANA_RPC_URL", default_value = DEFAULT_RPC_URL)]
        rpc: String,

        /// Output path for JSON report (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Maximum entries per bucket in the text summary
        #[arg(long, default_value = "20")]
        max_entries: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, so stdout stays clean for the JSON report
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Parse {
            input,
            signature,
            rpc,
            output,
            summary,
            max_entries,
        } => {
            let args = ParseArgs {
                input,
                signature,
                rpc_url: rpc,
                output_json: output,
                print_summary: summary,
                max_entries,
            };

            validate_args(&args)?;
            execute_parse(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
