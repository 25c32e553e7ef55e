//! Sprint population tool for MCP operations

use crate::mcp::responses::message_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddIssuesToSprintRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for moving issues into a sprint
#[derive(Default)]
pub struct AddIssuesToSprintTool;

impl AddIssuesToSprintTool {
    /// Creates a new instance of the AddIssuesToSprintTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddIssuesToSprintTool {
    fn name(&self) -> &'static str {
        "add_issues_to_sprint"
    }

    fn title(&self) -> &'static str {
        "Add Issues To Sprint"
    }

    fn description(&self) -> &'static str {
        "Move issues into a sprint by key"
    }

    fn read_only(&self) -> bool {
        false
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "sprint_id": {
                    "type": "integer",
                    "description": "Sprint id"
                },
                "issues": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Issue keys to move"
                }
            },
            "required": ["sprint_id", "issues"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddIssuesToSprintRequest = BaseToolImpl::parse_arguments(arguments)?;

        if request.issues.is_empty() {
            return Err(McpError::invalid_params(
                "issues must not be empty".to_string(),
                None,
            ));
        }

        match context
            .client
            .add_issues_to_sprint(request.sprint_id, &request.issues)
            .await
        {
            Ok(_) => Ok(message_response(format!(
                "Moved {} issue(s) into sprint {}",
                request.issues.len(),
                request.sprint_id
            ))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "add_issues_to_sprint")),
        }
    }
}
