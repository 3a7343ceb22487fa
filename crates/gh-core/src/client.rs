//! reqwest-backed implementation of [`GithubApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::api::{ApiResponse, CreateRepoParams, GithubApi};
use crate::config::GithubConfig;
use crate::error::Result;

/// GitHub `Accept` header for the REST v3 JSON media type
const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Outbound request timeout; the protocol core imposes no cancellation of
/// its own, this is plain client hygiene against a hung connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub REST API client
///
/// Holds one connection-pooling [`Client`] for the process lifetime. Every
/// call carries the token and media-type headers; GitHub also requires a
/// `User-Agent`, set once on the builder.
pub struct GithubClient {
    client: Client,
    config: GithubConfig,
}

impl GithubClient {
    /// Create a new client from configuration
    pub fn new(config: GithubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url(), path)
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.config.token())
    }

    /// Decode a response into status plus JSON body
    ///
    /// 204 responses and non-JSON error pages decode to a null body.
    async fn read_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        tracing::debug!(status, "GitHub API response");
        Ok(ApiResponse::new(status, body))
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn create_repository(&self, params: &CreateRepoParams) -> Result<ApiResponse> {
        tracing::debug!(name = %params.name, "POST /user/repos");

        let response = self
            .client
            .post(self.url("/user/repos"))
            .header("Authorization", self.auth_header())
            .header("Accept", ACCEPT_HEADER)
            .json(params)
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn authenticated_user(&self) -> Result<ApiResponse> {
        tracing::debug!("GET /user");

        let response = self
            .client
            .get(self.url("/user"))
            .header("Authorization", self.auth_header())
            .header("Accept", ACCEPT_HEADER)
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<ApiResponse> {
        tracing::debug!(owner, repo, "DELETE /repos");

        let response = self
            .client
            .delete(self.url(&format!("/repos/{}/{}", owner, repo)))
            .header("Authorization", self.auth_header())
            .header("Accept", ACCEPT_HEADER)
            .send()
            .await?;

        Self::read_response(response).await
    }
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("config", &self.config)
            .finish()
    }
}
