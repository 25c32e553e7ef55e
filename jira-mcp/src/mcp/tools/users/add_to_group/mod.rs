//! Group membership tool for MCP operations

use crate::mcp::responses::message_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddUserToGroupRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for adding an account to a group
#[derive(Default)]
pub struct AddUserToGroupTool;

impl AddUserToGroupTool {
    /// Creates a new instance of the AddUserToGroupTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddUserToGroupTool {
    fn name(&self) -> &'static str {
        "add_user_to_group"
    }

    fn title(&self) -> &'static str {
        "Add User To Group"
    }

    fn description(&self) -> &'static str {
        "Add an account to a group"
    }

    fn read_only(&self) -> bool {
        false
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "group": {
                    "type": "string",
                    "description": "Group name"
                },
                "account_id": {
                    "type": "string",
                    "description": "Account id to add"
                }
            },
            "required": ["group", "account_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddUserToGroupRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context
            .client
            .add_user_to_group(&request.group, &request.account_id)
            .await
        {
            Ok(_) => Ok(message_response(format!(
                "Added {} to group {}",
                request.account_id, request.group
            ))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "add_user_to_group")),
        }
    }
}
