//! Sprint creation tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateSprintRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for creating a sprint
#[derive(Default)]
pub struct CreateSprintTool;

impl CreateSprintTool {
    /// Creates a new instance of the CreateSprintTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateSprintTool {
    fn name(&self) -> &'static str {
        "create_sprint"
    }

    fn title(&self) -> &'static str {
        "Create Sprint"
    }

    fn description(&self) -> &'static str {
        "Create a sprint on a board, with optional planned start and end dates"
    }

    fn read_only(&self) -> bool {
        false
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "board_id": {
                    "type": "integer",
                    "description": "Board the sprint belongs to"
                },
                "name": {
                    "type": "string",
                    "description": "Sprint name"
                },
                "start_date": {
                    "type": "string",
                    "description": "Optional planned start date (ISO 8601)"
                },
                "end_date": {
                    "type": "string",
                    "description": "Optional planned end date (ISO 8601)"
                }
            },
            "required": ["board_id", "name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateSprintRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context
            .client
            .create_sprint(
                request.board_id,
                &request.name,
                request.start_date.as_deref(),
                request.end_date.as_deref(),
            )
            .await
        {
            Ok(sprint) => Ok(json_response(&sprint)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "create_sprint")),
        }
    }
}
