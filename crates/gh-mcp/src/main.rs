//! GitHub repository MCP Server
//!
//! A Model Context Protocol server that lets agentic IDEs create and delete
//! GitHub repositories for the authenticated user.
//!
//! # Usage
//!
//! ```bash
//! gh-mcp [--api-url <url>]
//! ```
//!
//! # Environment Variables
//!
//! - `GITHUB_TOKEN`: API token used for all GitHub calls (required)
//! - `GITHUB_API_URL`: Override the GitHub API base URL
//! - `RUST_LOG`: Control log verbosity (default: `gh_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::sync::Arc;

use clap::Parser;
use gh_core::{GithubClient, GithubConfig};
use gh_mcp::GithubMcpServer;

/// MCP server for GitHub repository management
#[derive(Parser)]
#[command(name = "gh-mcp")]
#[command(about = "MCP server for GitHub repository management")]
#[command(version)]
struct Args {
    /// GitHub API base URL (overrides GITHUB_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gh_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // A missing token is fatal before the protocol loop starts
    let mut config = GithubConfig::from_env()?;
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }

    tracing::info!(api_url = %config.api_url(), "Starting gh-mcp server");

    let client = GithubClient::new(config)?;
    let server = GithubMcpServer::new(Arc::new(client));
    server.run().await?;

    Ok(())
}
