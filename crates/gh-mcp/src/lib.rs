//! MCP Server for GitHub repository management
//!
//! This crate exposes GitHub remote-repository lifecycle operations via the
//! Model Context Protocol (MCP), allowing agentic IDEs (like Claude Desktop,
//! Windsurf, Cursor) to create and delete repositories on behalf of the
//! authenticated user.
//!
//! # Architecture
//!
//! The `gh-mcp` crate is a thin protocol layer over the `gh-core` client:
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ gh-mcp (MCP Server) ]
//!        | (GithubApi trait)
//!        v
//! [ gh-core (GitHub Client) ]
//!        |
//!        +--> GitHub REST API
//! ```
//!
//! # Tools
//!
//! The server exposes tools for:
//! - `create_github_repository` - Create a repository for the authenticated user
//! - `delete_github_repository` - Delete one of the user's repositories
//!
//! Operation failures (validation, API rejections, network faults) are
//! reported inside the tool result envelope with `isError: true`; protocol
//! failures (malformed input, unknown method or tool) use JSON-RPC error
//! responses. The two channels are never conflated.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::GithubMcpServer;
pub use tools::{get_tool_definitions, ToolContent, ToolDefinition, ToolResult};
