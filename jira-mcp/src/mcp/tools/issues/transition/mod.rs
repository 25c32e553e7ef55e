//! Workflow transition execution tool for MCP operations

use crate::mcp::responses::message_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::TransitionIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for executing one workflow transition on an issue
#[derive(Default)]
pub struct TransitionIssueTool;

impl TransitionIssueTool {
    /// Creates a new instance of the TransitionIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for TransitionIssueTool {
    fn name(&self) -> &'static str {
        "transition_issue"
    }

    fn title(&self) -> &'static str {
        "Transition Issue"
    }

    fn description(&self) -> &'static str {
        "Move an issue through the workflow by executing a transition id from \
         get_issue_transitions"
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
                    "description": "Issue key"
                },
                "transition": {
                    "type": "string",
                    "description": "Transition id to execute"
                }
            },
            "required": ["key", "transition"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: TransitionIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        tracing::debug!("Transitioning {} via {}", request.key, request.transition);

        match context
            .client
            .transition_issue(&request.key, &request.transition)
            .await
        {
            Ok(_) => Ok(message_response(format!(
                "Executed transition {} on {}",
                request.transition, request.key
            ))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "transition_issue")),
        }
    }
}
