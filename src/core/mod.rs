//! Shared infrastructure.
//!
//! Everything the tool domains lean on but do not own: configuration, the
//! crate error type, the MCP server handler and its transports, path checks
//! for file-reading tools, and the execution layer (scratch artifacts, output
//! capture, fault containment) that conversion tools run inside.

pub mod config;
pub mod error;
pub mod execution;
pub mod security;
pub mod server;
pub mod transport;

pub use config::{Config, LoggingConfig};
pub use error::{Error, Result};
pub use security::{PathSecurityError, validate_path};
pub use server::McpServer;
pub use transport::{TransportConfig, serve};
