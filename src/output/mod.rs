//! Output writers for reconstructed log reports.

pub mod json;

// Re-export main functions
pub use json::{read_report, report_to_string, to_report, write_report};
