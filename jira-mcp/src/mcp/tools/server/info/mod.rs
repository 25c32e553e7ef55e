//! Server metadata tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for introspecting the remote server
#[derive(Default)]
pub struct GetServerInfoTool;

impl GetServerInfoTool {
    /// Creates a new instance of the GetServerInfoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetServerInfoTool {
    fn name(&self) -> &'static str {
        "get_server_info"
    }

    fn title(&self) -> &'static str {
        "Get Server Info"
    }

    fn description(&self) -> &'static str {
        "Fetch remote server metadata: version, build, base URL"
    }

    fn read_only(&self) -> bool {
        true
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        match context.client.server_info().await {
            Ok(info) => Ok(json_response(&info)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_server_info")),
        }
    }
}
