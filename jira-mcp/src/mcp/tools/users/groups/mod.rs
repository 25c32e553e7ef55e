//! Group listing tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing groups
#[derive(Default)]
pub struct GetGroupsTool;

impl GetGroupsTool {
    /// Creates a new instance of the GetGroupsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetGroupsTool {
    fn name(&self) -> &'static str {
        "get_groups"
    }

    fn title(&self) -> &'static str {
        "Get Groups"
    }

    fn description(&self) -> &'static str {
        "List the groups known to the remote service"
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
        match context.client.groups().await {
            Ok(groups) => Ok(json_response(&groups)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_groups")),
        }
    }
}
