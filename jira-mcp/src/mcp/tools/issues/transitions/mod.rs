//! Workflow transition listing tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::IssueKeyRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing the workflow transitions available on an issue
#[derive(Default)]
pub struct GetIssueTransitionsTool;

impl GetIssueTransitionsTool {
    /// Creates a new instance of the GetIssueTransitionsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueTransitionsTool {
    fn name(&self) -> &'static str {
        "get_issue_transitions"
    }

    fn title(&self) -> &'static str {
        "Get Issue Transitions"
    }

    fn description(&self) -> &'static str {
        "List the workflow transitions currently available on an issue; transition ids \
         feed transition_issue"
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
        match context.client.issue_transitions(&request.key).await {
            Ok(transitions) => Ok(json_response(&transitions)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_issue_transitions")),
        }
    }
}
