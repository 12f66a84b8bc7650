use solana_log_trace::rpc::client::extract_log_messages;
use solana_log_trace::rpc::types::{JsonRpcRequest, JsonRpcResponse, TransactionResult};
use solana_log_trace::rpc::validate_signature;
use solana_log_trace::utils::RpcError;

#[test]
fn test_get_transaction_request_shape() {
    let request = JsonRpcRequest::get_transaction("sig", 7);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["method"], "getTransaction");
    assert_eq!(json["id"], 7);
    assert_eq!(json["params"][0], "sig");
    assert_eq!(json["params"][1]["maxSupportedTransactionVersion"], 0);
}

#[test]
fn test_extract_logs_from_failed_transaction() {
    let rpc_response: JsonRpcResponse<TransactionResult> = serde_json::from_value(serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "slot": 10,
            "blockTime": 1700000000,
            "meta": {
                "err": {"InstructionError": [0, {"Custom": 1}]},
                "logMessages": ["Program A invoke [1]", "Program A failed: custom program error: 0x1"]
            }
        }
    }))
    .unwrap();

    let logs = extract_log_messages(rpc_response, "sig").unwrap();
    assert_eq!(logs.len(), 2);
}

#[test]
fn test_not_found_error_message() {
    let rpc_response: JsonRpcResponse<TransactionResult> = serde_json::from_value(serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": {"code": -32000, "message": "Transaction not found"}
    }))
    .unwrap();

    let err = extract_log_messages(rpc_response, "sig").unwrap_err();
    assert!(matches!(err, RpcError::TransactionNotFound(_)));
}

#[test]
fn test_validate_signature_rejects_ambiguous_characters() {
    let mut sig = "1".repeat(87);
    sig.push('l');
    assert!(matches!(
        validate_signature(&sig),
        Err(RpcError::InvalidSignature(_))
    ));
}
