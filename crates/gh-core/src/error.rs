//! Error types for gh-core

/// Result type for gh-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the GitHub API
///
/// API-level rejections (a 4xx/5xx with a JSON body) are not errors here;
/// they come back as ordinary [`crate::ApiResponse`] values so callers can
/// inspect the status and message. This enum covers configuration faults
/// and transport faults only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Credential missing from the environment at startup
    #[error("{var} not set in environment")]
    MissingToken { var: String },

    /// Transport-level failure (connection, TLS, timeout)
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
