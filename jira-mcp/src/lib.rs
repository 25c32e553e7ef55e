//! # Jira MCP
//!
//! A Model Context Protocol (MCP) server library that exposes a
//! Jira-compatible issue tracker's REST API as callable agent tools.
//!
//! ## Features
//!
//! - **Configuration Guard**: fail-fast environment validation that names
//!   every missing variable, not just the first
//! - **Tool Registry**: a process-wide table of uniquely named tools with
//!   read-only/mutating annotations and JSON Schema parameters
//! - **Remote Client**: a thin authenticated REST client, one HTTP call per
//!   operation, no retry or caching of its own
//! - **MCP Support**: `rmcp`-based server handler serving the catalog over
//!   stdio
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jira_mcp::{JiraConfig, McpServer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = JiraConfig::from_env()?;
//! let server = McpServer::new(config)?;
//! // hand `server` to rmcp::serve_server with a stdio transport
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Connection configuration loaded from the environment
pub mod config;

/// Remote issue-tracker client
pub mod client;

/// Unified error handling for the library
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

// Re-export core types
pub use client::{JiraApi, JiraClient};
pub use config::{ConfigError, JiraConfig};
pub use error::{JiraError, Result};
pub use mcp::McpServer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Test utilities module for testing support
#[doc(hidden)]
pub mod test_utils;
