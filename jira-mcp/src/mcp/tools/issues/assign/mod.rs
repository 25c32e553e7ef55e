//! Issue assignment tool for MCP operations

use crate::mcp::responses::message_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AssignIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for setting an issue's assignee
#[derive(Default)]
pub struct AssignIssueTool;

impl AssignIssueTool {
    /// Creates a new instance of the AssignIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AssignIssueTool {
    fn name(&self) -> &'static str {
        "assign_issue"
    }

    fn title(&self) -> &'static str {
        "Assign Issue"
    }

    fn description(&self) -> &'static str {
        "Set an issue's assignee by account id"
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
                "assignee": {
                    "type": "string",
                    "description": "Account id of the new assignee"
                }
            },
            "required": ["key", "assignee"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AssignIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context
            .client
            .assign_issue(&request.key, &request.assignee)
            .await
        {
            Ok(_) => Ok(message_response(format!(
                "Assigned {} to {}",
                request.key, request.assignee
            ))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "assign_issue")),
        }
    }
}
