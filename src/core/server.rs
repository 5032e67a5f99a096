//! MCP Server implementation and lifecycle management.
//!
//! The main server handler implements the MCP protocol by delegating to the
//! domain services. Every tool call, from any transport and for any name,
//! goes through [`ToolRegistry::dispatch`].

use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    prompts::PromptService,
    resources::ResourceService,
    tools::{ToolRegistry, ToolRequest, ToolResult},
};

/// Instructions advertised to clients on initialization.
pub const INSTRUCTIONS: &str = "Diagram-as-code server. Use `dac` to render a diagram-as-code YAML \
     document to PNG, `cfn` to turn a CloudFormation template into such a document, `image` to read \
     a local image and `calculate` for basic arithmetic. Example inputs are available as resources.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher for every tool call.
    registry: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let registry = Arc::new(ToolRegistry::from_config(config.clone()));
        Self::with_registry(config, registry)
    }

    /// Create a server around an existing registry.
    pub fn with_registry(config: Arc<Config>, registry: Arc<ToolRegistry>) -> Self {
        let resource_service = Arc::new(ResourceService::new(
            config.clone(),
            registry.tool_names(),
        ));
        let prompt_service = Arc::new(PromptService::new());

        Self {
            config,
            registry,
            resource_service,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.registry.len()
    }

    // ========================================================================
    // JSON views for the HTTP transport
    // ========================================================================

    /// Tool definitions, serialized as in `tools/list`.
    pub fn list_tools(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.registry.definitions())
    }

    /// Run one tool call through the registry on the blocking pool.
    ///
    /// Handlers may block on file I/O and child processes. Unknown names
    /// come back as error results, like any other tool failure.
    async fn dispatch(&self, request: ToolRequest) -> Result<ToolResult, tokio::task::JoinError> {
        let registry = self.registry.clone();
        tokio::task::spawn_blocking(move || registry.dispatch(request)).await
    }

    /// Call a tool by name and return the serialized `CallToolResult`.
    ///
    /// Tool failures are part of the result (`isError: true`); `Err` is only
    /// returned when the call could not be executed at all.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let result = self
            .dispatch(ToolRequest::new(name, arguments))
            .await
            .map_err(|e| format!("Task execution failed: {}", e))?;

        serde_json::to_value(CallToolResult::from(result)).map_err(|e| e.to_string())
    }

    /// Resource descriptors, serialized as in `resources/list`.
    pub async fn list_resources(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.resource_service.list_resources().await)
    }

    /// Read a resource by URI, serialized as a `ReadResourceResult`.
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        let result = self
            .resource_service
            .read_resource(uri)
            .await
            .map_err(|e| e.to_string())?;
        serde_json::to_value(result).map_err(|e| e.to_string())
    }

    /// Prompt descriptors, serialized as in `prompts/list`.
    pub async fn list_prompts(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.prompt_service.list_prompts().await)
    }

    /// Render a prompt by name, serialized as a `GetPromptResult`.
    ///
    /// Non-string argument values are ignored.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, String> {
        let arguments = arguments
            .as_ref()
            .and_then(|v| v.as_object())
            .map(string_arguments);

        let result = self
            .prompt_service
            .get_prompt(name, arguments)
            .await
            .map_err(|e| e.to_string())?;
        serde_json::to_value(result).map_err(|e| e.to_string())
    }
}

/// Keep the string-valued prompt arguments.
fn string_arguments(map: &serde_json::Map<String, serde_json::Value>) -> HashMap<String, String> {
    map.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.registry.definitions(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        let request = ToolRequest::new(request.name, serde_json::Value::Object(arguments));

        self.dispatch(request)
            .await
            .map(CallToolResult::from)
            .map_err(|e| McpError::internal_error(format!("Task execution failed: {}", e), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.as_ref().map(string_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}
