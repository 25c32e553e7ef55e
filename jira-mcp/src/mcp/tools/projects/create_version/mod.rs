//! Version creation tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateVersionRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

/// Tool for creating a project version
#[derive(Default)]
pub struct CreateVersionTool;

impl CreateVersionTool {
    /// Creates a new instance of the CreateVersionTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateVersionTool {
    fn name(&self) -> &'static str {
        "create_version"
    }

    fn title(&self) -> &'static str {
        "Create Version"
    }

    fn description(&self) -> &'static str {
        "Create a version within a project"
    }

    fn read_only(&self) -> bool {
        false
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project": {
                    "type": "string",
                    "description": "Project key the version belongs to"
                },
                "name": {
                    "type": "string",
                    "description": "Version name, e.g. 1.2.0"
                },
                "description": {
                    "type": "string",
                    "description": "Optional description"
                }
            },
            "required": ["project", "name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateVersionRequest = BaseToolImpl::parse_arguments(arguments)?;

        let mut body = json!({ "project": request.project, "name": request.name });
        if let Some(description) = request.description {
            body["description"] = Value::String(description);
        }

        match context.client.create_version(body).await {
            Ok(version) => Ok(json_response(&version)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "create_version")),
        }
    }
}
