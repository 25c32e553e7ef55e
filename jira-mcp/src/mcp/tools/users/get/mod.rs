//! Account lookup tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetUserRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for looking up one account
#[derive(Default)]
pub struct GetUserTool;

impl GetUserTool {
    /// Creates a new instance of the GetUserTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetUserTool {
    fn name(&self) -> &'static str {
        "get_user"
    }

    fn title(&self) -> &'static str {
        "Get User"
    }

    fn description(&self) -> &'static str {
        "Look up one account by account id"
    }

    fn read_only(&self) -> bool {
        true
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "account_id": {
                    "type": "string",
                    "description": "Account id"
                }
            },
            "required": ["account_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetUserRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context.client.user(&request.account_id).await {
            Ok(user) => Ok(json_response(&user)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_user")),
        }
    }
}
