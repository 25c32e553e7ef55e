//! Favourite filter tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing the caller's saved filters
#[derive(Default)]
pub struct GetFavoriteFiltersTool;

impl GetFavoriteFiltersTool {
    /// Creates a new instance of the GetFavoriteFiltersTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetFavoriteFiltersTool {
    fn name(&self) -> &'static str {
        "get_favorite_filters"
    }

    fn title(&self) -> &'static str {
        "Get Favorite Filters"
    }

    fn description(&self) -> &'static str {
        "List the caller's favourite (saved) filters"
    }

    fn read_only(&self) -> bool {
        true
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        match context.client.favourite_filters().await {
            Ok(filters) => Ok(json_response(&filters)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_favorite_filters")),
        }
    }
}
