//! MCP server implementation for Kenyan phone numbers.
//!
//! This module provides the MCP protocol server that exposes the phone
//! normalizer and the intake helpers to AI assistants.

pub mod handlers;

pub use handlers::PhoneMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the phone MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once
/// the client disconnects.
pub async fn run_server(server: PhoneMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
