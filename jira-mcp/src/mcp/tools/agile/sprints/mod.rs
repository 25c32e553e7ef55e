//! Sprint listing tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetSprintsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing a board's sprints
#[derive(Default)]
pub struct GetSprintsTool;

impl GetSprintsTool {
    /// Creates a new instance of the GetSprintsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetSprintsTool {
    fn name(&self) -> &'static str {
        "get_sprints"
    }

    fn title(&self) -> &'static str {
        "Get Sprints"
    }

    fn description(&self) -> &'static str {
        "List the sprints of an agile board, paginated"
    }

    fn read_only(&self) -> bool {
        true
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "board_id": {
                    "type": "integer",
                    "description": "Board id"
                },
                "start_at": {
                    "type": "integer",
                    "description": "Offset of the first result (default 0)"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results (default 50)"
                }
            },
            "required": ["board_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetSprintsRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context
            .client
            .sprints(request.board_id, request.start_at, request.max_results)
            .await
        {
            Ok(sprints) => Ok(json_response(&sprints)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_sprints")),
        }
    }
}
