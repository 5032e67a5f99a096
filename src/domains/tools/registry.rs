//! Tool Registry - registration and dispatch for all tools.
//!
//! The registry is the dispatcher: it maps tool names to handlers, built
//! once at startup and read-only afterwards. Every transport calls tools
//! through [`ToolRegistry::dispatch`].

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

use rmcp::model::Tool;

use super::definitions::{CalculateTool, CfnTool, DacTool, ImageTool};
use super::error::ToolError;
use super::handlers::{ToolContext, ToolHandler, ToolRequest};
use super::result::ToolResult;
use crate::core::config::Config;
use crate::core::execution::run_recovering;

/// Name-to-handler map for all available tools.
pub struct ToolRegistry {
    handlers: HashMap<&'static str, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Registry with the backends named by the configuration.
    pub fn from_config(config: Arc<Config>) -> Self {
        Self::new(Arc::new(ToolContext::new(config)))
    }

    /// Registry whose tools share `context`.
    pub fn new(context: Arc<ToolContext>) -> Self {
        let handlers: Vec<Arc<dyn ToolHandler>> = vec![
            Arc::new(CalculateTool),
            Arc::new(ImageTool::new(context.config.clone())),
            Arc::new(DacTool::new(context.clone())),
            Arc::new(CfnTool::new(context)),
        ];

        let mut registry = Self {
            handlers: HashMap::with_capacity(handlers.len()),
        };
        for handler in handlers {
            registry.register(handler);
        }
        registry
    }

    fn register(&mut self, handler: Arc<dyn ToolHandler>) {
        let name = handler.name();
        if self.handlers.insert(name, handler).is_some() {
            warn!("Tool '{}' registered twice, keeping the last one", name);
        } else {
            info!("Registered tool: {}", name);
        }
    }

    /// All tool names, sorted.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// All tool definitions, sorted by name.
    pub fn definitions(&self) -> Vec<Tool> {
        self.tool_names()
            .into_iter()
            .filter_map(|name| self.handlers.get(name))
            .map(|handler| handler.definition())
            .collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch a request to its handler.
    ///
    /// An unknown name and a panicking handler both become error results.
    pub fn dispatch(&self, request: ToolRequest) -> ToolResult {
        let Some(handler) = self.handlers.get(request.name.as_str()) else {
            warn!("Unknown tool requested: {}", request.name);
            return ToolResult::error(ToolError::not_found(request.name).to_string());
        };

        info!("Dispatching tool call: {}", request.name);
        let arguments = request.arguments;
        run_recovering(handler.name(), || handler.call(arguments)).unwrap_or_else(|fault| {
            error!("{}", fault);
            ToolResult::error(format!("Tool '{}' failed unexpectedly", request.name))
        })
    }
}
