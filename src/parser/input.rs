//! Loading raw log lines from files and stdin.
//!
//! Accepted shapes:
//! - JSON array of strings
//! - JSON object carrying `logMessages` at the top level, under `meta`,
//!   or under `result.meta` (a saved getTransaction response)
//! - plain text, one log line per line

use crate::utils::config::LOG_FIELD_NAMES;
use crate::utils::error::InputError;
use log::{debug, warn};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read log lines from a file, or from stdin when the path is `-`
///
/// **Public** - used by the parse command
pub fn load_log_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();

    let text = if path.as_os_str() == "-" {
        debug!("Reading log lines from stdin");
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        debug!("Reading log lines from: {}", path.display());
        std::fs::read_to_string(path)?
    };

    parse_log_input(&text)
}

/// Split input text into log lines, detecting JSON vs plain text
///
/// **Public** - main entry point for input parsing
pub fn parse_log_input(text: &str) -> Result<Vec<String>, InputError> {
    let trimmed = text.trim_start();

    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => return extract_lines(&value),
            Err(e) => warn!("Input looks like JSON but failed to parse ({}), reading as text", e),
        }
    }

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!("Read {} plain text lines", lines.len());
    Ok(lines)
}

/// Extract log lines from a parsed JSON document
///
/// **Private** - internal helper for parse_log_input
fn extract_lines(value: &Value) -> Result<Vec<String>, InputError> {
    match value {
        Value::Array(items) => string_array(items),
        Value::Object(_) => {
            let candidates = [
                Some(value),
                value.get("meta"),
                value.get("result").and_then(|r| r.get("meta")),
            ];

            for obj in candidates.into_iter().flatten() {
                for field in LOG_FIELD_NAMES {
                    if let Some(Value::Array(items)) = obj.get(*field) {
                        debug!("Found log lines under '{}'", field);
                        return string_array(items);
                    }
                }
            }

            Err(InputError::InvalidFormat(format!(
                "JSON object has no log field (expected one of {:?})",
                LOG_FIELD_NAMES
            )))
        }
        _ => Err(InputError::InvalidFormat(
            "Logs must be a JSON array or object".to_string(),
        )),
    }
}

/// Convert a JSON array into strings, rejecting non-string items
///
/// **Private** - internal helper for extract_lines
fn string_array(items: &[Value]) -> Result<Vec<String>, InputError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                InputError::InvalidFormat(format!("Log entry {} is not a string: {}", index, item))
            })
        })
        .collect()
}
