//! The GitHub API surface used by the MCP tools
//!
//! [`GithubApi`] is the seam between the protocol handlers and the network:
//! the real [`crate::GithubClient`] implements it with reqwest, tests
//! substitute scripted stubs. Methods return an [`ApiResponse`] for every
//! answer the server gives, success or not; an `Err` means the exchange
//! itself failed (connection refused, timeout, TLS).

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Payload for repository creation (`POST /user/repos`)
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepoParams {
    pub name: String,
    pub private: bool,
    pub auto_init: bool,
    /// Omitted from the request body when not supplied by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw outcome of one API call: HTTP status plus decoded JSON body
///
/// Empty bodies (204) and non-JSON error pages decode to `Value::Null`;
/// callers pick out the fields they need with the accessors below.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// The API's `message` field, or `"Unknown error"` when absent or unparseable
    pub fn error_message(&self) -> String {
        self.field_or("message", "Unknown error")
    }

    /// String field lookup with a fallback for missing values
    pub fn field_or(&self, key: &str, fallback: &str) -> String {
        self.body
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Authenticated operations against a repository-hosting API
///
/// One method per endpoint the tools rely on. Implementations make exactly
/// one attempt per call; retry policy belongs to the caller of the tools,
/// not to this layer.
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// `POST /user/repos` — create a repository for the authenticated user
    async fn create_repository(&self, params: &CreateRepoParams) -> Result<ApiResponse>;

    /// `GET /user` — look up the authenticated user (provides `login`)
    async fn authenticated_user(&self) -> Result<ApiResponse>;

    /// `DELETE /repos/{owner}/{repo}` — delete a repository by full path
    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<ApiResponse>;
}
