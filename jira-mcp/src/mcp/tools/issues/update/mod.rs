//! Issue update tool for MCP operations

use crate::mcp::responses::message_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UpdateIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for patching arbitrary fields on an existing issue
#[derive(Default)]
pub struct UpdateIssueTool;

impl UpdateIssueTool {
    /// Creates a new instance of the UpdateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateIssueTool {
    fn name(&self) -> &'static str {
        "update_issue"
    }

    fn title(&self) -> &'static str {
        "Update Issue"
    }

    fn description(&self) -> &'static str {
        "Patch fields on an existing issue. The field map is passed through to the \
         remote schema."
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
                    "description": "Issue key to update"
                },
                "fields": {
                    "type": "object",
                    "description": "Fields to change, keyed by remote field name"
                }
            },
            "required": ["key", "fields"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UpdateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        if request.fields.is_empty() {
            return Err(McpError::invalid_params(
                "fields must not be empty".to_string(),
                None,
            ));
        }

        match context
            .client
            .update_issue(&request.key, request.fields)
            .await
        {
            Ok(_) => Ok(message_response(format!("Updated issue {}", request.key))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "update_issue")),
        }
    }
}
