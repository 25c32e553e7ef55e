//! Issue detail tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::IssueKeyRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for fetching full issue detail
#[derive(Default)]
pub struct GetIssueTool;

impl GetIssueTool {
    /// Creates a new instance of the GetIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueTool {
    fn name(&self) -> &'static str {
        "get_issue"
    }

    fn title(&self) -> &'static str {
        "Get Issue"
    }

    fn description(&self) -> &'static str {
        "Fetch full detail for one issue by key, including all fields"
    }

    fn read_only(&self) -> bool {
        true
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "key": {
                    "type": "string",
                    "description": "Issue key, e.g. PROJ-42"
                }
            },
            "required": ["key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: IssueKeyRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context.client.issue(&request.key).await {
            Ok(issue) => Ok(json_response(&issue)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_issue")),
        }
    }
}
