//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling with the
//! GitHub tool handlers.

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde_json::{Value, json};

use gh_core::GithubApi;

use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION, ServerCapabilities,
    ServerInfo, ToolCallParams, ToolsCapability,
};
use crate::tools::{ToolDefinition, get_tool_definitions};
use crate::{Error, Result};

/// MCP Server for GitHub repository management
///
/// The server reads one JSON-RPC request per line from stdin and writes one
/// response per line to stdout. Requests are processed strictly one at a
/// time, so response order always matches request order.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use gh_core::{GithubClient, GithubConfig};
/// use gh_mcp::GithubMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GithubClient::new(GithubConfig::from_env()?)?;
///     let server = GithubMcpServer::new(Arc::new(client));
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct GithubMcpServer {
    /// GitHub API collaborator; injected so tests can stub the network
    api: Arc<dyn GithubApi>,

    /// Tool catalog, built once and never mutated
    tools: Vec<ToolDefinition>,
}

impl GithubMcpServer {
    /// Create a new MCP server instance
    pub fn new(api: Arc<dyn GithubApi>) -> Self {
        Self {
            api,
            tools: get_tool_definitions(),
        }
    }

    /// Run the MCP server over stdio
    ///
    /// Processes messages until stdin reaches end-of-stream. Malformed
    /// input and dispatch faults produce error responses; neither
    /// terminates the loop.
    pub async fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_line(&line).await {
                Ok(Some(response)) => {
                    writeln!(stdout, "{}", response)?;
                    stdout.flush()?;
                }
                Ok(None) => {} // Notification, no response
                Err(e) => {
                    let error_response =
                        JsonRpcResponse::error(None, -32603, format!("Internal error: {}", e));
                    writeln!(stdout, "{}", serde_json::to_string(&error_response)?)?;
                    stdout.flush()?;
                }
            }
        }

        Ok(())
    }

    /// Process one raw input line into at most one response line
    ///
    /// Decode failures become a -32700 response with no id; dispatch faults
    /// become -32603 with the request id. `None` means the line was a
    /// notification and no response is owed.
    pub async fn handle_line(&self, line: &str) -> Result<Option<String>> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                let response =
                    JsonRpcResponse::error(None, -32700, format!("Parse error: {}", e));
                return Ok(Some(serde_json::to_string(&response)?));
            }
        };

        let id = request.id.clone();
        let response = match self.handle_request(request).await {
            Ok(Some(response)) => response,
            Ok(None) => return Ok(None),
            Err(e) => JsonRpcResponse::error(id, -32603, format!("Internal error: {}", e)),
        };

        Ok(Some(serde_json::to_string(&response)?))
    }

    /// Dispatch a decoded request to the matching method handler
    async fn handle_request(&self, request: JsonRpcRequest) -> Result<Option<JsonRpcResponse>> {
        match request.method.as_str() {
            "initialize" => Ok(Some(self.handle_initialize(request.id)?)),
            "initialized" | "notifications/initialized" => Ok(None),
            "tools/list" => Ok(Some(self.handle_tools_list(request.id))),
            "tools/call" => Ok(Some(self.handle_tools_call(request.id, request.params).await?)),
            _ => Ok(Some(JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ))),
        }
    }

    /// Handle the initialize request
    ///
    /// Returns the fixed protocol version, capabilities, and server
    /// identity. Stateless: nothing is negotiated and no ordering is
    /// enforced on later calls.
    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools_value: Vec<Value> = self
            .tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools_value }))
    }

    /// Handle tools/call request
    ///
    /// Known tools return their result envelope inside a successful
    /// response, whether or not the operation itself succeeded. Unknown
    /// tools are a protocol-level error.
    async fn handle_tools_call(
        &self,
        id: Option<Value>,
        params: Value,
    ) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = serde_json::from_value(params)?;

        match handle_tool_call(self.api.as_ref(), &tool_params.name, tool_params.arguments).await
        {
            Ok(result) => Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?)),
            Err(Error::UnknownTool(name)) => Ok(JsonRpcResponse::error(
                id,
                -32601,
                format!("Unknown tool: {}", name),
            )),
            Err(e) => Err(e),
        }
    }

    /// Get the tool catalog
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
