//! Transports: how MCP messages reach the server.
//!
//! | feature | transport | sessions |
//! |---|---|---|
//! | `stdio` (default) | stdin/stdout | one |
//! | `tcp` | line-delimited JSON-RPC over TCP | one per connection |
//! | `http` | JSON-RPC over POST | stateless |
//!
//! All of them drive the same [`McpServer`], so they share one tool
//! dispatcher.

mod config;
mod error;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;

use tracing::info;

use crate::core::McpServer;

/// Serve `server` on the configured transport until it shuts down.
pub async fn serve(config: TransportConfig, server: McpServer) -> TransportResult<()> {
    info!("Starting transport: {}", config.description());

    match config {
        #[cfg(feature = "stdio")]
        TransportConfig::Stdio => stdio::StdioTransport::run(server).await,
        #[cfg(feature = "tcp")]
        TransportConfig::Tcp(cfg) => tcp::TcpTransport::new(cfg).run(server).await,
        #[cfg(feature = "http")]
        TransportConfig::Http(cfg) => http::HttpTransport::new(cfg).run(server).await,
    }
}
