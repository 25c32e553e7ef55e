//! Watcher addition tool for MCP operations

use crate::mcp::responses::message_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddWatcherRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for adding a watcher to an issue
#[derive(Default)]
pub struct AddWatcherTool;

impl AddWatcherTool {
    /// Creates a new instance of the AddWatcherTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddWatcherTool {
    fn name(&self) -> &'static str {
        "add_watcher"
    }

    fn title(&self) -> &'static str {
        "Add Watcher"
    }

    fn description(&self) -> &'static str {
        "Add an account to an issue's watchers"
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
                "account_id": {
                    "type": "string",
                    "description": "Account id of the watcher"
                }
            },
            "required": ["key", "account_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddWatcherRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context
            .client
            .add_watcher(&request.key, &request.account_id)
            .await
        {
            Ok(_) => Ok(message_response(format!(
                "Added watcher to {}",
                request.key
            ))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "add_watcher")),
        }
    }
}
