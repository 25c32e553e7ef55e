//! Minimal issue creation tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateSimpleIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

/// Tool for creating an issue from the minimal field set
#[derive(Default)]
pub struct CreateSimpleIssueTool;

impl CreateSimpleIssueTool {
    /// Creates a new instance of the CreateSimpleIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateSimpleIssueTool {
    fn name(&self) -> &'static str {
        "create_simple_issue"
    }

    fn title(&self) -> &'static str {
        "Create Simple Issue"
    }

    fn description(&self) -> &'static str {
        "Create an issue from project key, summary, issue type (default Task), and an \
         optional description"
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
                    "description": "Project key the issue belongs to"
                },
                "summary": {
                    "type": "string",
                    "description": "One-line summary"
                },
                "issue_type": {
                    "type": "string",
                    "description": "Issue type name (default Task)"
                },
                "description": {
                    "type": "string",
                    "description": "Optional longer description"
                }
            },
            "required": ["project", "summary"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateSimpleIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.summary, "summary")?;

        let mut fields = serde_json::Map::new();
        fields.insert("project".to_string(), json!({ "key": request.project }));
        fields.insert("summary".to_string(), Value::String(request.summary));
        fields.insert("issuetype".to_string(), json!({ "name": request.issue_type }));
        if let Some(description) = request.description {
            fields.insert("description".to_string(), Value::String(description));
        }

        match context.client.create_issue(fields).await {
            Ok(created) => Ok(json_response(&created)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "create_simple_issue")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingJira;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_simple_create_builds_field_map() {
        let fake = Arc::new(RecordingJira::new());
        let context = ToolContext::new(fake.clone());

        let mut args = serde_json::Map::new();
        args.insert("project".to_string(), json!("X"));
        args.insert("summary".to_string(), json!("fix the thing"));

        CreateSimpleIssueTool::new().execute(args, &context).await.unwrap();

        let sent = fake.call_args("create_issue").unwrap();
        assert_eq!(sent["project"], json!({ "key": "X" }));
        assert_eq!(sent["summary"], json!("fix the thing"));
        assert_eq!(sent["issuetype"], json!({ "name": "Task" }));
    }
}
