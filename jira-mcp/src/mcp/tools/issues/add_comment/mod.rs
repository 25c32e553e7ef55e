//! Comment creation tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddCommentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for appending a comment to an issue
#[derive(Default)]
pub struct AddCommentTool;

impl AddCommentTool {
    /// Creates a new instance of the AddCommentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddCommentTool {
    fn name(&self) -> &'static str {
        "add_comment"
    }

    fn title(&self) -> &'static str {
        "Add Comment"
    }

    fn description(&self) -> &'static str {
        "Append a comment to an issue"
    }

    fn read_only(&self) -> bool {
        false
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "key": {
                    "type": "string",
                    "description": "Issue key"
                },
                "body": {
                    "type": "string",
                    "description": "Comment body"
                }
            },
            "required": ["key", "body"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddCommentRequest = BaseToolImpl::parse_arguments(arguments)?;
        McpValidation::validate_not_empty(&request.body, "comment body")?;

        match context.client.add_comment(&request.key, &request.body).await {
            Ok(comment) => Ok(json_response(&comment)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "add_comment")),
        }
    }
}
