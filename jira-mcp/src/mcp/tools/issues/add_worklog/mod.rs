//! Worklog creation tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddWorklogRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for appending a worklog entry to an issue
#[derive(Default)]
pub struct AddWorklogTool;

impl AddWorklogTool {
    /// Creates a new instance of the AddWorklogTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddWorklogTool {
    fn name(&self) -> &'static str {
        "add_worklog"
    }

    fn title(&self) -> &'static str {
        "Add Worklog"
    }

    fn description(&self) -> &'static str {
        "Append a time-tracking worklog entry to an issue"
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
                "time_spent": {
                    "type": "string",
                    "description": "Time spent, e.g. 3h 20m"
                },
                "comment": {
                    "type": "string",
                    "description": "Optional worklog comment"
                }
            },
            "required": ["key", "time_spent"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddWorklogRequest = BaseToolImpl::parse_arguments(arguments)?;
        McpValidation::validate_not_empty(&request.time_spent, "time_spent")?;

        match context
            .client
            .add_worklog(
                &request.key,
                &request.time_spent,
                request.comment.as_deref(),
            )
            .await
        {
            Ok(worklog) => Ok(json_response(&worklog)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "add_worklog")),
        }
    }
}
