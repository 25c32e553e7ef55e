//! Comment listing tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::IssueKeyRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing an issue's comments
#[derive(Default)]
pub struct GetIssueCommentsTool;

impl GetIssueCommentsTool {
    /// Creates a new instance of the GetIssueCommentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueCommentsTool {
    fn name(&self) -> &'static str {
        "get_issue_comments"
    }

    fn title(&self) -> &'static str {
        "Get Issue Comments"
    }

    fn description(&self) -> &'static str {
        "List the discussion comments on an issue"
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
                    "description": "Issue key"
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
        match context.client.issue_comments(&request.key).await {
            Ok(comments) => Ok(json_response(&comments)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_issue_comments")),
        }
    }
}
