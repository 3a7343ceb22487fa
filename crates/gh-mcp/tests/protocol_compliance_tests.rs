//! MCP Protocol Compliance Integration Tests
//!
//! Tests that the MCP server correctly implements JSON-RPC 2.0 and MCP
//! protocol requirements, including ID preservation, error codes, the
//! parse-error recovery path, and the catalog surface.

use std::sync::Arc;

use async_trait::async_trait;
use gh_core::{ApiResponse, CreateRepoParams, GithubApi};
use gh_mcp::GithubMcpServer;
use pretty_assertions::assert_eq;
use serde_json::Value;

/// GithubApi stub that fails the test if any endpoint is reached
///
/// Protocol-level behavior must never touch the network.
struct NoNetwork;

#[async_trait]
impl GithubApi for NoNetwork {
    async fn create_repository(&self, _: &CreateRepoParams) -> gh_core::Result<ApiResponse> {
        panic!("create_repository must not be called");
    }

    async fn authenticated_user(&self) -> gh_core::Result<ApiResponse> {
        panic!("authenticated_user must not be called");
    }

    async fn delete_repository(&self, _: &str, _: &str) -> gh_core::Result<ApiResponse> {
        panic!("delete_repository must not be called");
    }
}

fn setup_server() -> GithubMcpServer {
    GithubMcpServer::new(Arc::new(NoNetwork))
}

async fn roundtrip(server: &GithubMcpServer, line: &str) -> Value {
    let response = server
        .handle_line(line)
        .await
        .expect("dispatch should not fail")
        .expect("request should produce a response");
    serde_json::from_str(&response).expect("response must be valid JSON")
}

// ==========================================================================
// JSON-RPC 2.0 ID Preservation
// ==========================================================================

#[tokio::test]
async fn test_numeric_id_preserved_in_response() {
    let server = setup_server();

    let response =
        roundtrip(&server, r#"{"jsonrpc":"2.0","id":42,"method":"initialize","params":{}}"#).await;

    assert_eq!(response["id"], 42, "Numeric ID must be echoed back exactly");
    assert_eq!(response["jsonrpc"], "2.0");
}

#[tokio::test]
async fn test_string_id_preserved_in_response() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":"req-abc-123","method":"initialize","params":{}}"#,
    )
    .await;

    assert_eq!(
        response["id"], "req-abc-123",
        "String ID must be echoed back exactly"
    );
}

#[tokio::test]
async fn test_id_preserved_in_error_response() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":"err-test","method":"nonexistent/method","params":{}}"#,
    )
    .await;

    assert_eq!(
        response["id"], "err-test",
        "ID must be preserved even in error responses"
    );
    assert!(response.get("error").is_some());
}

#[tokio::test]
async fn test_large_numeric_id_preserved() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":999999999,"method":"tools/list","params":{}}"#,
    )
    .await;

    assert_eq!(response["id"], 999999999);
}

// ==========================================================================
// Error Code Correctness (JSON-RPC 2.0 / MCP spec)
// ==========================================================================

#[tokio::test]
async fn test_method_not_found_returns_32601() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"completely/unknown","params":{}}"#,
    )
    .await;

    assert_eq!(
        response["error"]["code"], -32601,
        "Unknown method must return -32601 (Method not found)"
    );
    let msg = response["error"]["message"].as_str().unwrap();
    assert!(
        msg.contains("completely/unknown"),
        "Error message should include the unknown method name, got: {}",
        msg
    );
}

#[tokio::test]
async fn test_unknown_tool_returns_32601_not_result() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"mystery_tool","arguments":{}}}"#,
    )
    .await;

    assert!(
        response.get("result").is_none(),
        "Unknown tool must not produce a result envelope"
    );
    assert_eq!(response["error"]["code"], -32601);
    let msg = response["error"]["message"].as_str().unwrap();
    assert!(
        msg.contains("mystery_tool"),
        "Error message should name the unknown tool, got: {}",
        msg
    );
}

#[tokio::test]
async fn test_invalid_json_returns_parse_error() {
    let server = setup_server();

    let response = roundtrip(&server, r#"{"not valid json"#).await;

    assert_eq!(
        response["error"]["code"], -32700,
        "Malformed JSON must return -32700 (Parse error)"
    );
    assert!(
        response.get("id").is_none(),
        "Parse errors carry no id; none could be read from the line"
    );
}

#[tokio::test]
async fn test_missing_method_field_is_parse_error() {
    let server = setup_server();

    // Valid JSON but missing the required "method" field
    let response = roundtrip(&server, r#"{"jsonrpc":"2.0","id":1,"params":{}}"#).await;

    assert_eq!(response["error"]["code"], -32700);
}

#[tokio::test]
async fn test_malformed_line_does_not_stop_processing() {
    let server = setup_server();

    let bad = roundtrip(&server, "garbage").await;
    assert_eq!(bad["error"]["code"], -32700);

    let good = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}"#,
    )
    .await;
    assert_eq!(good["id"], 2);
    assert!(good.get("result").is_some());
}

#[tokio::test]
async fn test_invalid_params_for_tools_call_returns_internal_error() {
    let server = setup_server();

    // tools/call requires params with a "name" field; send garbage params
    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":"not-an-object"}"#,
    )
    .await;

    assert_eq!(response["error"]["code"], -32603);
    assert_eq!(response["id"], 1, "Internal errors still echo the request id");
}

// ==========================================================================
// Initialize
// ==========================================================================

#[tokio::test]
async fn test_initialize_returns_protocol_version() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1.0"}}}"#,
    )
    .await;

    assert_eq!(
        response["result"]["protocolVersion"], "2024-11-05",
        "Server must respond with its supported protocol version"
    );
}

#[tokio::test]
async fn test_initialize_returns_server_info() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
    )
    .await;

    let server_info = &response["result"]["serverInfo"];
    assert_eq!(server_info["name"], "gh-mcp");
    assert!(server_info["version"].is_string());
}

#[tokio::test]
async fn test_initialize_result_is_fixed_regardless_of_params() {
    let server = setup_server();

    let with_params = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"1999-01-01","clientInfo":{"name":"x","version":"9"}}}"#,
    )
    .await;
    let without_params = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#,
    )
    .await;

    assert_eq!(with_params["result"], without_params["result"]);
}

#[tokio::test]
async fn test_initialize_declares_tools_capability_only() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
    )
    .await;

    let capabilities = response["result"]["capabilities"].as_object().unwrap();
    assert!(capabilities["tools"].is_object());
    assert!(
        !capabilities.contains_key("resources"),
        "This server declares tool invocation only"
    );
}

#[tokio::test]
async fn test_initialize_does_not_gate_other_methods() {
    let server = setup_server();

    // tools/list works without any prior initialize on a fresh server
    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#,
    )
    .await;

    assert!(response.get("result").is_some());
}

// ==========================================================================
// Tool Catalog Surface
// ==========================================================================

#[tokio::test]
async fn test_tools_list_returns_both_tools() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#,
    )
    .await;

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"create_github_repository"));
    assert!(names.contains(&"delete_github_repository"));
}

#[tokio::test]
async fn test_tools_list_declares_schemas() {
    let server = setup_server();

    let response = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#,
    )
    .await;

    let tools = response["result"]["tools"].as_array().unwrap();
    for tool in tools {
        let schema = &tool["inputSchema"];
        assert_eq!(schema["type"], "object");
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "name"));
    }
}

#[tokio::test]
async fn test_tools_list_is_stable_across_calls() {
    let server = setup_server();

    let line = r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#;
    let first = roundtrip(&server, line).await;
    let second = roundtrip(&server, line).await;

    assert_eq!(first["result"], second["result"]);
}

// ==========================================================================
// Notifications
// ==========================================================================

#[tokio::test]
async fn test_initialized_notification_produces_no_response() {
    let server = setup_server();

    for method in ["initialized", "notifications/initialized"] {
        let line = format!(r#"{{"jsonrpc":"2.0","method":"{}"}}"#, method);
        let response = server.handle_line(&line).await.unwrap();
        assert!(response.is_none(), "{} must not produce a response", method);
    }
}
