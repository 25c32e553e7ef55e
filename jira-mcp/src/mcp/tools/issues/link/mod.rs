//! Issue link tool for MCP operations

use crate::mcp::responses::message_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateIssueLinkRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for relating two issues with a named link type
#[derive(Default)]
pub struct CreateIssueLinkTool;

impl CreateIssueLinkTool {
    /// Creates a new instance of the CreateIssueLinkTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateIssueLinkTool {
    fn name(&self) -> &'static str {
        "create_issue_link"
    }

    fn title(&self) -> &'static str {
        "Create Issue Link"
    }

    fn description(&self) -> &'static str {
        "Relate two issues with a named link type, e.g. Blocks or Relates. The link \
         type vocabulary is owned by the remote service."
    }

    fn read_only(&self) -> bool {
        false
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "link_type": {
                    "type": "string",
                    "description": "Link type name, e.g. Blocks"
                },
                "inward_issue": {
                    "type": "string",
                    "description": "Key of the inward issue"
                },
                "outward_issue": {
                    "type": "string",
                    "description": "Key of the outward issue"
                }
            },
            "required": ["link_type", "inward_issue", "outward_issue"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateIssueLinkRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context
            .client
            .create_issue_link(
                &request.link_type,
                &request.inward_issue,
                &request.outward_issue,
            )
            .await
        {
            Ok(_) => Ok(message_response(format!(
                "Linked {} {} {}",
                request.inward_issue, request.link_type, request.outward_issue
            ))),
            Err(e) => Err(McpErrorHandler::handle_error(e, "create_issue_link")),
        }
    }
}
