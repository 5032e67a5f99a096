//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `backend/` - Conversion backends used by `dac` and `cfn`
//! - `handlers.rs` - The `ToolHandler` contract and shared tool context
//! - `registry.rs` - Name-to-handler dispatch
//! - `result.rs` - Typed tool results
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a params struct and a type
//!    implementing `ToolHandler`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `ToolRegistry::new`
//!
//! Every transport picks it up from the registry.

pub mod backend;
pub mod definitions;
mod error;
mod handlers;
mod registry;
mod result;

pub use error::ToolError;
pub use handlers::{ToolContext, ToolHandler, ToolRequest, parse_arguments, tool_definition};
pub use registry::ToolRegistry;
pub use result::ToolResult;
