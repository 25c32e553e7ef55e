//! Board listing tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetBoardsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing agile boards
#[derive(Default)]
pub struct GetBoardsTool;

impl GetBoardsTool {
    /// Creates a new instance of the GetBoardsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetBoardsTool {
    fn name(&self) -> &'static str {
        "get_boards"
    }

    fn title(&self) -> &'static str {
        "Get Boards"
    }

    fn description(&self) -> &'static str {
        "List agile boards, paginated"
    }

    fn read_only(&self) -> bool {
        true
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "start_at": {
                    "type": "integer",
                    "description": "Offset of the first result (default 0)"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results (default 50)"
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetBoardsRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context
            .client
            .boards(request.start_at, request.max_results)
            .await
        {
            Ok(boards) => Ok(json_response(&boards)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_boards")),
        }
    }
}
