//! Issue search tool for MCP operations
//!
//! Runs a JQL query and reshapes each hit to a `{key, summary}` row, in the
//! order the remote returned them.

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchIssuesRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

/// Tool for searching issues with a JQL query
#[derive(Default)]
pub struct SearchIssuesTool;

impl SearchIssuesTool {
    /// Creates a new instance of the SearchIssuesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchIssuesTool {
    fn name(&self) -> &'static str {
        "search_issues"
    }

    fn title(&self) -> &'static str {
        "Search Issues"
    }

    fn description(&self) -> &'static str {
        "Search for issues with a JQL query. Returns a page of {key, summary} rows \
         plus the total match count."
    }

    fn read_only(&self) -> bool {
        true
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "JQL query, e.g. project = PROJ AND status = Open"
                },
                "start_at": {
                    "type": "integer",
                    "description": "Offset of the first result (default 0)"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results (default 50)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchIssuesRequest = BaseToolImpl::parse_arguments(arguments)?;

        tracing::debug!("Searching issues: {}", request.query);

        let page = context
            .client
            .search_issues(&request.query, request.start_at, request.max_results)
            .await
            .map_err(|e| McpErrorHandler::handle_error(e, "search_issues"))?;

        let issues: Vec<_> = page
            .issues
            .iter()
            .map(|issue| json!({ "key": issue.key, "summary": issue.summary() }))
            .collect();

        Ok(json_response(&json!({
            "start_at": page.start_at,
            "max_results": page.max_results,
            "total": page.total,
            "issues": issues,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingJira;
    use rmcp::model::RawContent;
    use std::sync::Arc;

    fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_search_reshapes_to_key_summary_pairs_in_order() {
        let fake = Arc::new(RecordingJira::new());
        fake.respond_with(
            "search_issues",
            json!({
                "startAt": 0,
                "maxResults": 50,
                "total": 2,
                "issues": [
                    { "key": "X-1", "fields": { "summary": "a" } },
                    { "key": "X-2", "fields": { "summary": "b" } }
                ]
            }),
        );
        let context = ToolContext::new(fake.clone());

        let result = SearchIssuesTool::new()
            .execute(args(json!({ "query": "project = X" })), &context)
            .await
            .unwrap();

        let RawContent::Text(text) = &result.content[0].raw else {
            panic!("expected text content");
        };
        let payload: serde_json::Value = serde_json::from_str(&text.text).unwrap();
        assert_eq!(
            payload["issues"],
            json!([
                { "key": "X-1", "summary": "a" },
                { "key": "X-2", "summary": "b" }
            ])
        );
        assert_eq!(payload["total"], 2);

        // The pagination window was forwarded verbatim
        assert_eq!(
            fake.call_args("search_issues").unwrap(),
            json!({ "jql": "project = X", "start_at": 0, "max_results": 50 })
        );
    }

    #[tokio::test]
    async fn test_search_missing_query_performs_no_remote_call() {
        let fake = Arc::new(RecordingJira::new());
        let context = ToolContext::new(fake.clone());

        let result = SearchIssuesTool::new()
            .execute(serde_json::Map::new(), &context)
            .await;

        assert!(result.is_err());
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_surfaces_remote_failure() {
        let fake = Arc::new(RecordingJira::new());
        fake.fail_with_status("search_issues", 401, "expired token");
        let context = ToolContext::new(fake);

        let err = SearchIssuesTool::new()
            .execute(args(json!({ "query": "project = X" })), &context)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Authentication failed"));
    }
}
