//! Project component listing tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetProjectRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing a project's components
#[derive(Default)]
pub struct GetProjectComponentsTool;

impl GetProjectComponentsTool {
    /// Creates a new instance of the GetProjectComponentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetProjectComponentsTool {
    fn name(&self) -> &'static str {
        "get_project_components"
    }

    fn title(&self) -> &'static str {
        "Get Project Components"
    }

    fn description(&self) -> &'static str {
        "List the components of a project"
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
                    "description": "Project key"
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
        match context.client.project_components(&request.key).await {
            Ok(components) => Ok(json_response(&components)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_project_components")),
        }
    }
}
