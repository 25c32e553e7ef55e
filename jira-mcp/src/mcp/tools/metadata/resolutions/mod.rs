//! Resolution taxonomy tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for enumerating resolutions
#[derive(Default)]
pub struct GetResolutionsTool;

impl GetResolutionsTool {
    /// Creates a new instance of the GetResolutionsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetResolutionsTool {
    fn name(&self) -> &'static str {
        "get_resolutions"
    }

    fn title(&self) -> &'static str {
        "Get Resolutions"
    }

    fn description(&self) -> &'static str {
        "Enumerate the resolution taxonomy"
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
        match context.client.resolutions().await {
            Ok(resolutions) => Ok(json_response(&resolutions)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_resolutions")),
        }
    }
}
