//! Project listing tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing all visible projects
#[derive(Default)]
pub struct GetProjectsTool;

impl GetProjectsTool {
    /// Creates a new instance of the GetProjectsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetProjectsTool {
    fn name(&self) -> &'static str {
        "get_projects"
    }

    fn title(&self) -> &'static str {
        "Get Projects"
    }

    fn description(&self) -> &'static str {
        "List all projects visible to the caller"
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
        match context.client.projects().await {
            Ok(projects) => Ok(json_response(&projects)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_projects")),
        }
    }
}
