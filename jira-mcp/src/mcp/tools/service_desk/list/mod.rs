//! Service-desk listing tool for MCP operations
//!
//! Shares the absent-subsystem rule with the support probe: a 404/501
//! yields an empty list, anything else propagates.

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

/// Tool listing service desks
#[derive(Default)]
pub struct GetServiceDesksTool;

impl GetServiceDesksTool {
    /// Creates a new instance of the GetServiceDesksTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetServiceDesksTool {
    fn name(&self) -> &'static str {
        "get_service_desks"
    }

    fn title(&self) -> &'static str {
        "Get Service Desks"
    }

    fn description(&self) -> &'static str {
        "List service desks. Deployments without the service-desk subsystem yield an \
         empty list."
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
        match context.client.service_desks().await {
            Ok(Value::Null) => Ok(json_response(&json!([]))),
            Ok(desks) => Ok(json_response(&desks)),
            Err(e) if e.is_subsystem_absent() => {
                tracing::debug!("Service desk subsystem absent: {e}");
                Ok(json_response(&json!([])))
            }
            Err(e) => Err(McpErrorHandler::handle_error(e, "get_service_desks")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingJira;
    use rmcp::model::RawContent;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_absent_subsystem_yields_empty_list_not_error() {
        let fake = Arc::new(RecordingJira::new());
        fake.fail_with_status("get_service_desks", 404, "unsupported");
        let context = ToolContext::new(fake);

        let result = GetServiceDesksTool::new()
            .execute(serde_json::Map::new(), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let RawContent::Text(text) = &result.content[0].raw else {
            panic!("expected text content");
        };
        let payload: serde_json::Value = serde_json::from_str(&text.text).unwrap();
        assert_eq!(payload, json!([]));
    }

    #[tokio::test]
    async fn test_permission_failure_is_not_swallowed() {
        let fake = Arc::new(RecordingJira::new());
        fake.fail_with_status("get_service_desks", 403, "forbidden");
        let context = ToolContext::new(fake);

        let result = GetServiceDesksTool::new()
            .execute(serde_json::Map::new(), &context)
            .await;
        assert!(result.is_err());
    }
}
