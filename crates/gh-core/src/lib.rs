//! GitHub API client layer
//!
//! This crate holds everything the MCP protocol layer needs to talk to a
//! repository-hosting API: process configuration, the [`GithubApi`] seam,
//! and the `reqwest`-backed [`GithubClient`] that implements it against the
//! GitHub REST API.
//!
//! # Architecture
//!
//! ```text
//! [ gh-mcp (MCP Server) ]
//!        | (GithubApi trait)
//!        v
//! [ gh-core (this crate) ]
//!        |
//!        +--> [ GithubConfig (token, base URL) ]
//!        +--> [ GithubClient (reqwest) ] --> GitHub REST API
//! ```
//!
//! Protocol handlers depend only on the trait, so tests can substitute a
//! scripted stub for the network.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{ApiResponse, CreateRepoParams, GithubApi};
pub use client::GithubClient;
pub use config::GithubConfig;
pub use error::{Error, Result};
