//! MCP Server implementation and lifecycle management.
//!
//! The server handler implements the MCP protocol by delegating to one
//! service per domain. Tools come from the table in
//! `domains/tools/registry.rs`; adding a tool does not touch this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    prompts::PromptService, resources::ResourceService, tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

const INSTRUCTIONS: &str = "Skill server. Call list_all_skills to see the skill catalog, then \
    get_skill_guide(skill_name) for a skill's full guide. The algorithmic art and canvas design \
    guides come with their templates and fonts. Resources: config://app-settings, system://info \
    and file:///{path}. Prompts: code_review and frontend_design.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    resource_service: Arc<ResourceService>,

    prompt_service: Arc<PromptService>,

    /// Dispatch table used by the HTTP transport.
    #[cfg(feature = "http")]
    tool_registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            resource_service: Arc::new(ResourceService::new(config.clone())),
            prompt_service: Arc::new(PromptService::new()),
            #[cfg(feature = "http")]
            tool_registry: Arc::new(ToolRegistry::new(config.clone())),
            tool_router: build_tool_router::<Self>(config.clone()),
            config,
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

    /// Every tool the router serves.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Call a tool by name with JSON arguments (HTTP transport).
    #[cfg(feature = "http")]
    pub fn call_tool_json(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        self.tool_registry.call_tool(name, arguments)
    }

    pub async fn resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources().await
    }

    pub async fn resource_templates(&self) -> Vec<ResourceTemplate> {
        self.resource_service.list_resource_templates().await
    }

    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        self.resource_service
            .read_resource(uri)
            .await
            .map_err(McpError::from)
    }

    pub async fn prompts(&self) -> Vec<Prompt> {
        self.prompt_service.list_prompts().await
    }

    /// Render a prompt. Non-string argument values are ignored.
    pub async fn prompt(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<GetPromptResult, McpError> {
        self.prompt_service
            .get_prompt(name, arguments.map(string_arguments))
            .await
            .map_err(McpError::from)
    }
}

/// Keep only string-valued prompt arguments.
fn string_arguments(map: &JsonObject) -> HashMap<String, String> {
    map.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resources().await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resource_templates().await,
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
        self.read(&request.uri).await
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: self.prompts().await,
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
        self.prompt(&request.name, request.arguments.as_ref()).await
    }
}
