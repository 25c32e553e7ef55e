//! Board creation tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateBoardRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for creating an agile board
#[derive(Default)]
pub struct CreateBoardTool;

impl CreateBoardTool {
    /// Creates a new instance of the CreateBoardTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateBoardTool {
    fn name(&self) -> &'static str {
        "create_board"
    }

    fn title(&self) -> &'static str {
        "Create Board"
    }

    fn description(&self) -> &'static str {
        "Create an agile board over an existing filter"
    }

    fn read_only(&self) -> bool {
        false
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Board name"
                },
                "board_type": {
                    "type": "string",
                    "description": "Board type, scrum or kanban (default scrum)"
                },
                "filter_id": {
                    "type": "integer",
                    "description": "Id of the filter the board is built over"
                }
            },
            "required": ["name", "filter_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateBoardRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context
            .client
            .create_board(&request.name, &request.board_type, request.filter_id)
            .await
        {
            Ok(board) => Ok(json_response(&board)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "create_board")),
        }
    }
}
