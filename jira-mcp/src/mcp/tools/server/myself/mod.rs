//! Caller identity tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for introspecting the authenticated caller
#[derive(Default)]
pub struct GetMyselfTool;

impl GetMyselfTool {
    /// Creates a new instance of the GetMyselfTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetMyselfTool {
    fn name(&self) -> &'static str {
        "get_myself"
    }

    fn title(&self) -> &'static str {
        "Get Myself"
    }

    fn description(&self) -> &'static str {
        "Fetch the identity of the authenticated caller"
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
        match context.client.myself().await {
            Ok(me) => Ok(json_response(&me)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_myself")),
        }
    }
}
