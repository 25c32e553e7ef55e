//! Issue type taxonomy tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for enumerating issue types
#[derive(Default)]
pub struct GetIssueTypesTool;

impl GetIssueTypesTool {
    /// Creates a new instance of the GetIssueTypesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueTypesTool {
    fn name(&self) -> &'static str {
        "get_issue_types"
    }

    fn title(&self) -> &'static str {
        "Get Issue Types"
    }

    fn description(&self) -> &'static str {
        "Enumerate the issue type taxonomy"
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
        match context.client.issue_types().await {
            Ok(types) => Ok(json_response(&types)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_issue_types")),
        }
    }
}
