//! Model Context Protocol (MCP) server support

use crate::client::{JiraApi, JiraClient};
use crate::config::JiraConfig;
use crate::error::Result;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

/// MCP module structure
pub mod responses;
pub mod shared_utils;
pub mod tool_registry;
pub mod tools;
pub mod types;

use tool_registry::{ToolContext, ToolRegistry};

const SERVER_INSTRUCTIONS: &str = "An issue tracker bridge. Use search_issues to run JQL queries, \
get_issue/create_issue/update_issue to work with issues, transition_issue to move them through \
the workflow, and the project, user, board, and sprint tools to manage the surrounding entities. \
Tools marked read-only never modify the remote system.";

/// MCP server exposing the remote issue tracker as a tool catalog
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server from validated configuration, building the real
    /// HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured host is not a valid URL or if
    /// two tools were registered under the same name.
    pub fn new(config: JiraConfig) -> Result<Self> {
        let client: Arc<dyn JiraApi> = Arc::new(JiraClient::new(&config)?);
        Self::with_client(client)
    }

    /// Create a server over an injected client handle.
    ///
    /// Tests use this to substitute a recording fake for the remote
    /// service.
    pub fn with_client(client: Arc<dyn JiraApi>) -> Result<Self> {
        let mut tool_registry = ToolRegistry::new();
        tools::register_all(&mut tool_registry)?;

        tracing::info!("Registered {} tools", tool_registry.len());

        Ok(Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(client)),
        })
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tool_registry.len()
    }

    /// The advertised tool listing, as served by `list_tools`.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_registry.list_tools()
    }

    /// Look up a tool by name and execute it against the shared client.
    ///
    /// An unknown name is an invalid-request error; no handler runs.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if let Some(tool) = self.tool_registry.get_tool(name) {
            tool.execute(arguments, &self.tool_context).await
        } else {
            Err(McpError::invalid_request(
                format!("Unknown tool: {name}"),
                None,
            ))
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability { list_changed: None }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            instructions: Some(SERVER_INSTRUCTIONS.into()),
            server_info: Implementation {
                name: "jira-mcp".into(),
                version: crate::VERSION.into(),
            },
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "jira-mcp".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingJira;
    use serde_json::json;

    fn test_server() -> (McpServer, Arc<RecordingJira>) {
        let fake = Arc::new(RecordingJira::new());
        let server = McpServer::with_client(fake.clone() as Arc<dyn JiraApi>).unwrap();
        (server, fake)
    }

    #[test]
    fn test_server_creation_registers_catalog() {
        let (server, _) = test_server();
        // The catalog spans issues, projects, users, metadata, agile, and
        // the service desk probes.
        assert!(server.tool_count() >= 35, "got {}", server.tool_count());
    }

    #[test]
    fn test_get_info_declares_tools_capability() {
        let (server, _) = test_server();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "jira-mcp");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_is_not_found() {
        let (server, fake) = test_server();
        let result = server.dispatch("no_such_tool", serde_json::Map::new()).await;
        assert!(result.is_err());
        assert!(fake.calls().is_empty(), "no handler may run for an unknown tool");
    }

    #[tokio::test]
    async fn test_dispatch_executes_registered_tool() {
        let (server, fake) = test_server();
        fake.respond_with(
            "search_issues",
            json!({
                "startAt": 0,
                "maxResults": 50,
                "total": 1,
                "issues": [{ "key": "X-1", "fields": { "summary": "a" } }]
            }),
        );

        let mut args = serde_json::Map::new();
        args.insert("query".to_string(), json!("project = X"));
        let result = server.dispatch("search_issues", args).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(fake.calls(), vec!["search_issues".to_string()]);
    }

    #[tokio::test]
    async fn test_dispatch_validation_failure_never_reaches_client() {
        let (server, fake) = test_server();
        // get_issue requires `key`
        let result = server.dispatch("get_issue", serde_json::Map::new()).await;
        assert!(result.is_err());
        assert!(fake.calls().is_empty());
    }
}
