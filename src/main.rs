//! `dac-mcp-server` binary.
//!
//! Reads the configuration, sets up logging on stderr and serves MCP on the
//! selected transport until the client goes away.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use dac_mcp_server::core::{Config, LoggingConfig, McpServer, transport};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config.logging);

    config.validate()?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    config.log_summary();

    let server = McpServer::new(config.clone());
    transport::serve(config.transport, server).await?;

    info!("Server shutting down");
    Ok(())
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `MCP_LOG_LEVEL`. Output goes to stderr because stdout
/// carries the protocol stream in stdio mode.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
