use crate::utils::config::DEFAULT_RPC_URL;
use std::path::PathBuf;

/// Arguments for the parse command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ParseArgs {
    /// Log file to read (`-` for stdin)
    pub input: Option<PathBuf>,

    /// Transaction signature to fetch over RPC
    pub signature: Option<String>,

    /// RPC endpoint URL (used with `signature`)
    pub rpc_url: String,

    /// Output path for the JSON report (stdout when absent)
    pub output_json: Option<PathBuf>,

    /// Print text tree to stdout
    pub print_summary: bool,

    /// Maximum entries shown per bucket in the text tree
    pub max_entries: usize,
}

impl Default for ParseArgs {
    fn default() -> Self {
        Self {
            input: None,
            signature: None,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            output_json: None,
            print_summary: false,
            max_entries: 20,
        }
    }
}

/// Where the raw log lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    File(PathBuf),
    Rpc { rpc_url: String, signature: String },
}

impl ParseArgs {
    /// Resolve the log source; `None` unless exactly one is configured
    pub fn source(&self) -> Option<LogSource> {
        match (&self.input, &self.signature) {
            (Some(path), None) => Some(LogSource::File(path.clone())),
            (None, Some(signature)) => Some(LogSource::Rpc {
                rpc_url: self.rpc_url.clone(),
                signature: signature.trim().to_string(),
            }),
            _ => None,
        }
    }
}
