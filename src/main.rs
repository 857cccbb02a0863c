//! KE Phone MCP Server - Main entry point
//!
//! Serves the Kenyan phone number tools over the Model Context Protocol (MCP)
//! using stdio.

use anyhow::Result;
use ke_phone::{Config, PhoneMcpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Office WhatsApp number: {}", config.office_whatsapp);

    let server = PhoneMcpServer::new(config);

    info!("Starting MCP server with stdio transport");
    ke_phone::server::run_server(server).await?;

    info!("KE Phone MCP Server shutdown complete");
    Ok(())
}
