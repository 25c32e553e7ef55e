//! Field metadata tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for enumerating field metadata
#[derive(Default)]
pub struct GetFieldsTool;

impl GetFieldsTool {
    /// Creates a new instance of the GetFieldsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetFieldsTool {
    fn name(&self) -> &'static str {
        "get_fields"
    }

    fn title(&self) -> &'static str {
        "Get Fields"
    }

    fn description(&self) -> &'static str {
        "Enumerate field metadata, including custom fields and their ids"
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
        match context.client.fields().await {
            Ok(fields) => Ok(json_response(&fields)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_fields")),
        }
    }
}
