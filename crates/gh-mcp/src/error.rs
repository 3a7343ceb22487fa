//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
///
/// These are dispatch-level failures. Operation-level failures never reach
/// this enum; the handlers fold them into the tool result envelope.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the GitHub client layer
    #[error("github error: {0}")]
    Core(#[from] gh_core::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown tool requested
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// IO error on the stdio transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
