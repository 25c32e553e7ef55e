//! Project detail tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetProjectRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for fetching one project's metadata
#[derive(Default)]
pub struct GetProjectTool;

impl GetProjectTool {
    /// Creates a new instance of the GetProjectTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetProjectTool {
    fn name(&self) -> &'static str {
        "get_project"
    }

    fn title(&self) -> &'static str {
        "Get Project"
    }

    fn description(&self) -> &'static str {
        "Fetch one project's metadata by key"
    }

    fn read_only(&self) -> bool {
        true
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "key": {
                    "type": "string",
                    "description": "Project key, e.g. PROJ"
                }
            },
            "required": ["key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetProjectRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context.client.project(&request.key).await {
            Ok(project) => Ok(json_response(&project)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_project")),
        }
    }
}
