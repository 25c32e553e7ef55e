//! Attachment upload tool for MCP operations
//!
//! Reads a local file and uploads its contents to the issue. The read
//! happens before the remote call so an unreadable path never produces a
//! partial upload.

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddAttachmentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use std::path::Path;

/// Tool for attaching a local file to an issue
#[derive(Default)]
pub struct AddAttachmentTool;

impl AddAttachmentTool {
    /// Creates a new instance of the AddAttachmentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddAttachmentTool {
    fn name(&self) -> &'static str {
        "add_attachment"
    }

    fn title(&self) -> &'static str {
        "Add Attachment"
    }

    fn description(&self) -> &'static str {
        "Attach a local file to an issue"
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
                "path": {
                    "type": "string",
                    "description": "Path of the local file to upload"
                }
            },
            "required": ["key", "path"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddAttachmentRequest = BaseToolImpl::parse_arguments(arguments)?;

        let path = Path::new(&request.path);
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                McpError::invalid_params(format!("Invalid file path: {}", request.path), None)
            })?
            .to_string();

        let content = tokio::fs::read(path).await.map_err(|e| {
            McpError::invalid_params(format!("Cannot read {}: {e}", request.path), None)
        })?;

        tracing::debug!("Uploading {} ({} bytes) to {}", file_name, content.len(), request.key);

        match context
            .client
            .add_attachment(&request.key, &file_name, content)
            .await
        {
            Ok(attachment) => Ok(json_response(&attachment)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "add_attachment")),
        }
    }
}
