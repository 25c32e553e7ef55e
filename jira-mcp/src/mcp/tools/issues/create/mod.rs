//! Issue creation tool for MCP operations
//!
//! Accepts an open field map so callers can set any field the remote
//! schema knows, including custom fields. Only the locally required keys
//! are validated; the rest passes through opaquely.

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for creating issues from an arbitrary field map
#[derive(Default)]
pub struct CreateIssueTool;

impl CreateIssueTool {
    /// Creates a new instance of the CreateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateIssueTool {
    fn name(&self) -> &'static str {
        "create_issue"
    }

    fn title(&self) -> &'static str {
        "Create Issue"
    }

    fn description(&self) -> &'static str {
        "Create an issue from a field map. The map is passed through to the remote \
         schema; at minimum it must contain project, summary, and issuetype."
    }

    fn read_only(&self) -> bool {
        false
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "fields": {
                    "type": "object",
                    "description": "Issue fields keyed by remote field name, \
                        e.g. {\"project\": {\"key\": \"PROJ\"}, \"summary\": \"...\", \
                        \"issuetype\": {\"name\": \"Task\"}}"
                }
            },
            "required": ["fields"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        for required in ["project", "summary", "issuetype"] {
            if !request.fields.contains_key(required) {
                return Err(McpError::invalid_params(
                    format!("Missing required issue field: {required}"),
                    None,
                ));
            }
        }

        match context.client.create_issue(request.fields).await {
            Ok(created) => {
                tracing::info!("Created issue");
                Ok(json_response(&created))
            }
            Err(e) => Err(McpErrorHandler::handle_error(e, "create_issue")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingJira;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_requires_minimum_fields_before_any_remote_call() {
        let fake = Arc::new(RecordingJira::new());
        let context = ToolContext::new(fake.clone());

        let mut args = serde_json::Map::new();
        args.insert("fields".to_string(), json!({ "summary": "s" }));

        let err = CreateIssueTool::new().execute(args, &context).await.unwrap_err();
        assert!(err.to_string().contains("project"));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_passes_unknown_fields_through() {
        let fake = Arc::new(RecordingJira::new());
        fake.respond_with("create_issue", json!({ "key": "X-3" }));
        let context = ToolContext::new(fake.clone());

        let mut args = serde_json::Map::new();
        args.insert(
            "fields".to_string(),
            json!({
                "project": { "key": "X" },
                "summary": "s",
                "issuetype": { "name": "Task" },
                "customfield_10010": "opaque"
            }),
        );

        CreateIssueTool::new().execute(args, &context).await.unwrap();

        let sent = fake.call_args("create_issue").unwrap();
        assert_eq!(sent["customfield_10010"], json!("opaque"));
    }
}
