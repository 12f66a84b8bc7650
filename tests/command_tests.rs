use solana_log_trace::commands::{execute_parse, validate_args, LogSource, ParseArgs};
use solana_log_trace::output::read_report;
use std::path::PathBuf;

const SIGNATURE: &str =
    "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW";

#[test]
fn test_validate_args_both_sources() {
    let args = ParseArgs {
        input: Some(PathBuf::from("logs.txt")),
        signature: Some(SIGNATURE.to_string()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
    assert!(args.source().is_none());
}

#[test]
fn test_validate_args_empty_rpc() {
    let args = ParseArgs {
        signature: Some(SIGNATURE.to_string()),
        rpc_url: String::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_short_signature() {
    let args = ParseArgs {
        signature: Some("5VERv8".to_string()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_zero_max_entries() {
    let args = ParseArgs {
        input: Some(PathBuf::from("logs.txt")),
        max_entries: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_source_trims_signature() {
    let args = ParseArgs {
        signature: Some(format!("  {}\n", SIGNATURE)),
        rpc_url: "http://localhost:8899".to_string(),
        ..Default::default()
    };

    assert_eq!(
        args.source(),
        Some(LogSource::Rpc {
            rpc_url: "http://localhost:8899".to_string(),
            signature: SIGNATURE.to_string(),
        })
    );
}

#[test]
fn test_execute_parse_json_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("tx.json");
    let output = temp_dir.path().join("report.json");
    std::fs::write(
        &input,
        r#"{"meta": {"logMessages": [
            "Program A invoke [1]",
            "Program B invoke [2]",
            "Program B success",
            "Program A success"
        ]}}"#,
    )
    .unwrap();

    let args = ParseArgs {
        input: Some(input),
        output_json: Some(output.clone()),
        print_summary: true,
        ..Default::default()
    };
    validate_args(&args).unwrap();
    execute_parse(args).unwrap();

    let report = read_report(&output).unwrap();
    assert_eq!(report.summary.instruction_count, 1);
    assert_eq!(report.summary.inner_instruction_count, 1);
}

#[test]
fn test_execute_parse_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ParseArgs {
        input: Some(temp_dir.path().join("nope.txt")),
        output_json: Some(temp_dir.path().join("report.json")),
        ..Default::default()
    };

    assert!(execute_parse(args).is_err());
}
