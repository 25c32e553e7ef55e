//! Service-desk support probe for MCP operations
//!
//! An absent subsystem (404/501 from the service-desk root) reports
//! `{supported: false}` instead of failing. Any other remote failure
//! propagates normally.

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

/// Tool probing whether the optional service-desk subsystem is enabled
#[derive(Default)]
pub struct CheckServiceDeskSupportTool;

impl CheckServiceDeskSupportTool {
    /// Creates a new instance of the CheckServiceDeskSupportTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CheckServiceDeskSupportTool {
    fn name(&self) -> &'static str {
        "check_service_desk_support"
    }

    fn title(&self) -> &'static str {
        "Check Service Desk Support"
    }

    fn description(&self) -> &'static str {
        "Probe whether the optional service-desk subsystem is enabled on this \
         deployment. Reports {supported: false} when absent."
    }

    fn read_only(&self) -> bool {
        true
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        match context.client.service_desk_info().await {
            Ok(info) => Ok(json_response(&json!({ "supported": true, "info": info }))),
            Err(e) if e.is_subsystem_absent() => {
                tracing::debug!("Service desk subsystem absent: {e}");
                Ok(json_response(&json!({ "supported": false })))
            }
            Err(e) => Err(McpErrorHandler::handle_error(e, "check_service_desk_support")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingJira;
    use rmcp::model::RawContent;
    use std::sync::Arc;

    async fn run(fake: Arc<RecordingJira>) -> serde_json::Value {
        let context = ToolContext::new(fake);
        let result = CheckServiceDeskSupportTool::new()
            .execute(serde_json::Map::new(), &context)
            .await
            .unwrap();
        let RawContent::Text(text) = &result.content[0].raw else {
            panic!("expected text content");
        };
        serde_json::from_str(&text.text).unwrap()
    }

    #[tokio::test]
    async fn test_absent_subsystem_reports_unsupported() {
        let fake = Arc::new(RecordingJira::new());
        fake.fail_with_status("check_service_desk_support", 404, "no service desk here");
        let payload = run(fake).await;
        assert_eq!(payload["supported"], json!(false));
    }

    #[tokio::test]
    async fn test_present_subsystem_reports_supported() {
        let fake = Arc::new(RecordingJira::new());
        fake.respond_with("check_service_desk_support", json!({ "version": "5.0" }));
        let payload = run(fake).await;
        assert_eq!(payload["supported"], json!(true));
    }

    #[tokio::test]
    async fn test_other_failures_still_propagate() {
        let fake = Arc::new(RecordingJira::new());
        fake.fail_with_status("check_service_desk_support", 401, "bad token");
        let context = ToolContext::new(fake);
        let result = CheckServiceDeskSupportTool::new()
            .execute(serde_json::Map::new(), &context)
            .await;
        assert!(result.is_err());
    }
}
