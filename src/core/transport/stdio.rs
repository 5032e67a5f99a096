//! Standard MCP mode: one session over the process's stdin and stdout.
//!
//! stdout carries nothing but protocol messages: logs go to stderr and
//! backend output is captured per call.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve one client over stdin/stdout until it disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "Ready - serving {} tools over stdin/stdout",
            server.tool_count()
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(TransportError::handshake)?;

        let reason = service
            .waiting()
            .await
            .map_err(TransportError::session)?;

        info!("STDIO session ended: {:?}", reason);
        Ok(())
    }
}
