//! Project creation tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateProjectRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

/// Tool for creating a project
#[derive(Default)]
pub struct CreateProjectTool;

impl CreateProjectTool {
    /// Creates a new instance of the CreateProjectTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateProjectTool {
    fn name(&self) -> &'static str {
        "create_project"
    }

    fn title(&self) -> &'static str {
        "Create Project"
    }

    fn description(&self) -> &'static str {
        "Create a project from key, name, type, and an optional lead and template"
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
                    "description": "Project key, e.g. PROJ"
                },
                "name": {
                    "type": "string",
                    "description": "Display name"
                },
                "project_type": {
                    "type": "string",
                    "description": "Project type key (default software)"
                },
                "lead": {
                    "type": "string",
                    "description": "Account id of the project lead"
                },
                "template": {
                    "type": "string",
                    "description": "Project template key"
                }
            },
            "required": ["key", "name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateProjectRequest = BaseToolImpl::parse_arguments(arguments)?;

        let mut body = json!({
            "key": request.key,
            "name": request.name,
            "projectTypeKey": request.project_type,
        });
        if let Some(lead) = request.lead {
            body["leadAccountId"] = Value::String(lead);
        }
        if let Some(template) = request.template {
            body["projectTemplateKey"] = Value::String(template);
        }

        match context.client.create_project(body).await {
            Ok(project) => Ok(json_response(&project)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "create_project")),
        }
    }
}
