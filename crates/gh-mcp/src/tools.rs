//! MCP Tool definitions
//!
//! This module contains the tool catalog for the MCP server. Tools are the
//! primary way agents interact with the GitHub repository lifecycle.
//!
//! # Tools
//!
//! - `create_github_repository` - Create a repository for the authenticated user
//! - `delete_github_repository` - Delete one of the user's repositories
//!
//! The catalog is built once at server construction and never changes at
//! runtime.

use serde::{Deserialize, Serialize};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
///
/// `is_error` is present on the wire (as `isError`) only when the content
/// describes a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "create_github_repository".to_string(),
            description: "Create a new GitHub repository".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the repository to create"
                    },
                    "private": {
                        "type": "boolean",
                        "description": "Whether the repository should be private",
                        "default": false
                    },
                    "description": {
                        "type": "string",
                        "description": "Description of the repository"
                    },
                    "auto_init": {
                        "type": "boolean",
                        "description": "Initialize repository with README",
                        "default": true
                    }
                },
                "required": ["name"]
            }),
        },
        ToolDefinition {
            name: "delete_github_repository".to_string(),
            description: "Delete a GitHub repository".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the repository to delete"
                    }
                },
                "required": ["name"]
            }),
        },
    ]
}
