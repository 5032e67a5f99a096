//! Tool handler contract.
//!
//! Every tool implements [`ToolHandler`]; the registry dispatches to it by
//! name. Handlers are synchronous and may block (file I/O, backend
//! processes), so async callers run them on the blocking pool.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use super::backend::Backends;
use super::error::ToolError;
use super::result::ToolResult;
use crate::core::config::Config;
use crate::core::execution::{DebugArtifacts, OutputCapture};

/// One incoming tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    /// The name of the tool to execute.
    pub name: String,

    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl ToolRequest {
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub config: Arc<Config>,
    pub backends: Backends,
    pub debug: DebugArtifacts,
}

impl ToolContext {
    /// Context with the backends named by the configuration.
    pub fn new(config: Arc<Config>) -> Self {
        let backends = Backends::from_config(&config.converter);
        Self::with_backends(config, backends)
    }

    /// Context with explicit backends.
    pub fn with_backends(config: Arc<Config>, backends: Backends) -> Self {
        let debug = DebugArtifacts::new(&config.diagnostics);
        Self {
            config,
            backends,
            debug,
        }
    }

    /// Parent directory for scratch scopes.
    pub fn scratch_dir(&self) -> Option<&Path> {
        self.config.converter.scratch_dir.as_deref()
    }

    /// A fresh output sink for one backend call.
    pub fn output_capture(&self) -> OutputCapture {
        OutputCapture::from_setting(self.config.converter.retain_backend_output)
    }
}

/// A tool the registry can dispatch to.
pub trait ToolHandler: Send + Sync {
    /// Unique tool name.
    fn name(&self) -> &'static str;

    /// Metadata advertised to clients (name, description, input schema).
    fn definition(&self) -> Tool;

    /// Handle one call. Never panics on bad input; every path ends in a result.
    fn call(&self, arguments: serde_json::Value) -> ToolResult;
}

/// Build a tool definition with the schema of `P`.
pub fn tool_definition<P>(name: &'static str, description: &'static str) -> Tool
where
    P: JsonSchema + 'static,
{
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Deserialize tool arguments into a params struct.
///
/// A missing argument object is treated as empty, so required fields still
/// produce a precise error.
pub fn parse_arguments<P>(arguments: serde_json::Value) -> Result<P, ToolError>
where
    P: DeserializeOwned,
{
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
