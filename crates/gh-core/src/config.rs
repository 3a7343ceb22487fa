//! Process configuration for the GitHub client
//!
//! The credential is read once at startup and passed into the client
//! explicitly; nothing in this crate reads ambient environment state after
//! construction. A missing token is fatal before the protocol loop starts.

use crate::error::{Error, Result};

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Default GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Configuration for the GitHub API client
#[derive(Clone)]
pub struct GithubConfig {
    token: String,
    api_url: String,
}

impl GithubConfig {
    /// Create a configuration from explicit values
    ///
    /// Trailing slashes on the base URL are stripped so path joining stays
    /// predictable.
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from the environment
    ///
    /// `GITHUB_TOKEN` must be present and non-empty; `GITHUB_API_URL` falls
    /// back to the public GitHub API.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::MissingToken {
                var: TOKEN_ENV.to_string(),
            })?;

        let api_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self::new(token, api_url))
    }

    /// Replace the API base URL, normalizing it the same way as [`new`](Self::new)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The bearer token used for all authenticated calls
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The API base URL, without a trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

// The token must never end up in logs or panic output.
impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}
