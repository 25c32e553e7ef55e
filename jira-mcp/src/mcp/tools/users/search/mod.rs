//! Account search tool for MCP operations

use crate::mcp::responses::json_response;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchUsersRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for querying accounts
#[derive(Default)]
pub struct SearchUsersTool;

impl SearchUsersTool {
    /// Creates a new instance of the SearchUsersTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchUsersTool {
    fn name(&self) -> &'static str {
        "search_users"
    }

    fn title(&self) -> &'static str {
        "Search Users"
    }

    fn description(&self) -> &'static str {
        "Query accounts by display name or email"
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
                    "description": "Query matched against display name and email"
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
        let request: SearchUsersRequest = BaseToolImpl::parse_arguments(arguments)?;
        match context
            .client
            .search_users(&request.query, request.max_results)
            .await
        {
            Ok(users) => Ok(json_response(&users)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "search_users")),
        }
    }
}
