//! Component creation tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateComponentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

/// Tool for creating a project component
#[derive(Default)]
pub struct CreateComponentTool;

impl CreateComponentTool {
    /// Creates a new instance of the CreateComponentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateComponentTool {
    fn name(&self) -> &'static str {
        "create_component"
    }

    fn title(&self) -> &'static str {
        "Create Component"
    }

    fn description(&self) -> &'static str {
        "Create a component within a project"
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
                    "description": "Project key the component belongs to"
                },
                "name": {
                    "type": "string",
                    "description": "Component name"
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
        let request: CreateComponentRequest = BaseToolImpl::parse_arguments(arguments)?;

        let mut body = json!({ "project": request.project, "name": request.name });
        if let Some(description) = request.description {
            body["description"] = Value::String(description);
        }

        match context.client.create_component(body).await {
            Ok(component) => Ok(json_response(&component)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "create_component")),
        }
    }
}
