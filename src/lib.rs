//! An MCP server for diagram-as-code.
//!
//! Four tools are exposed: `dac` renders a diagram YAML document to PNG,
//! `cfn` derives such a document from a CloudFormation template, `image`
//! returns a local image as base64 and `calculate` does basic arithmetic.
//! Conversions are delegated to the `awsdac` executable and run inside a
//! scratch directory that is removed when the call ends, whatever the outcome.
//!
//! [`core`] carries configuration, the server handler, transports and the
//! execution layer. [`domains`] carries the tools themselves plus the
//! resource and prompt catalogs.
//!
//! ```rust,no_run
//! use dac_mcp_server::core::{Config, McpServer, serve};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = config.transport.clone();
//!     serve(transport, McpServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
