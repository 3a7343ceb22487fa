//! MCP Tool handlers
//!
//! This module implements the handlers for MCP tool calls, delegating to
//! gh-core for the GitHub API interactions.
//!
//! Every operation-level failure (missing argument, API rejection, network
//! fault) is folded into the [`ToolResult`] envelope with `isError: true`.
//! The only `Err` this module produces is [`Error::UnknownTool`], which the
//! server reports as a protocol-level error instead.

use serde_json::Value;

use gh_core::{CreateRepoParams, GithubApi};

use crate::tools::ToolResult;
use crate::{Error, Result};

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(
    api: &dyn GithubApi,
    tool_name: &str,
    arguments: Value,
) -> Result<ToolResult> {
    match tool_name {
        "create_github_repository" => Ok(create_repository(api, arguments).await),
        "delete_github_repository" => Ok(delete_repository(api, arguments).await),
        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// Extract the required `name` argument; empty counts as absent
fn required_name(arguments: &Value) -> Option<&str> {
    arguments
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

/// Handle create_github_repository
///
/// Validation happens before any network call. One creation request, no
/// retry; 201 is the only success status.
async fn create_repository(api: &dyn GithubApi, arguments: Value) -> ToolResult {
    let Some(name) = required_name(&arguments) else {
        return ToolResult::error("Repository name is required");
    };

    let params = CreateRepoParams {
        name: name.to_string(),
        private: arguments
            .get("private")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        auto_init: arguments
            .get("auto_init")
            .and_then(Value::as_bool)
            .unwrap_or(true),
        description: arguments
            .get("description")
            .and_then(Value::as_str)
            .map(String::from),
    };

    match api.create_repository(&params).await {
        Ok(response) if response.status == 201 => {
            let repo_url = response.field_or("html_url", "Unknown");
            let clone_url = response.field_or("clone_url", "Unknown");
            tracing::info!(name = %params.name, %repo_url, "Repository created");

            ToolResult::text(format!(
                "Successfully created GitHub repository '{}'\n\nRepository URL: {}\nClone URL: {}",
                params.name, repo_url, clone_url
            ))
        }
        Ok(response) => ToolResult::error(format!(
            "Failed to create repository: {} (Status: {})",
            response.error_message(),
            response.status
        )),
        Err(e) => ToolResult::error(format!("Error creating repository: {}", e)),
    }
}

/// Handle delete_github_repository
///
/// The deletion endpoint is keyed by owner and name, so the acting username
/// is looked up first; a failed lookup aborts before any deletion attempt.
async fn delete_repository(api: &dyn GithubApi, arguments: Value) -> ToolResult {
    let Some(name) = required_name(&arguments) else {
        return ToolResult::error("Repository name is required");
    };

    let user = match api.authenticated_user().await {
        Ok(response) if response.status == 200 => response,
        Ok(response) => {
            return ToolResult::error(format!("Failed to get user info: {}", response.status));
        }
        Err(e) => return ToolResult::error(format!("Error deleting repository: {}", e)),
    };

    // A 200 without a login leaves no owner to key the deletion path on;
    // treat it as a failed lookup rather than guessing.
    let Some(login) = user.body.get("login").and_then(Value::as_str) else {
        return ToolResult::error("Failed to get user info: response missing login");
    };

    match api.delete_repository(login, name).await {
        Ok(response) if response.status == 204 => {
            tracing::info!(owner = login, repo = name, "Repository deleted");
            ToolResult::text(format!(
                "Successfully deleted GitHub repository '{}/{}'",
                login, name
            ))
        }
        Ok(response) => ToolResult::error(format!(
            "Failed to delete repository: {} (Status: {})",
            response.error_message(),
            response.status
        )),
        Err(e) => ToolResult::error(format!("Error deleting repository: {}", e)),
    }
}
