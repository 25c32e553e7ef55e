//! Tool registry for MCP operations
//!
//! This module provides the registry pattern for managing MCP tools: a
//! trait every tool implements, a registry keyed by unique tool name, and
//! the shared context handed to each handler at execution time.

use crate::client::JiraApi;
use crate::error::{JiraError, Result};
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool, ToolAnnotations};
use rmcp::Error as McpError;
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared by all tools during execution
///
/// Carries the remote client handle as an explicit dependency instead of an
/// ambient global, so tests can substitute a fake.
#[derive(Clone)]
pub struct ToolContext {
    /// The shared, read-mostly remote client handle
    pub client: Arc<dyn JiraApi>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(client: Arc<dyn JiraApi>) -> Self {
        Self { client }
    }
}

/// Trait defining the interface for all MCP tools
///
/// Tools are stateless; everything they need arrives through the argument
/// map and the [`ToolContext`]. Each tool declares whether it mutates the
/// remote system so callers can gate invocations behind confirmation.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's unique name
    fn name(&self) -> &'static str;

    /// Get the tool's human-readable title
    fn title(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Whether the tool has no mutating effect on the remote system
    fn read_only(&self) -> bool;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Annotations advertised with the tool listing
    fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations {
            title: Some(self.title().to_string()),
            read_only_hint: Some(self.read_only()),
            destructive_hint: Some(!self.read_only()),
            idempotent_hint: None,
            open_world_hint: None,
        }
    }

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry.
    ///
    /// A duplicate name is a startup defect, not an override mechanism, and
    /// is rejected so the process fails fast.
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) -> Result<()> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(JiraError::DuplicateTool(name));
        }
        self.tools.insert(name, Box::new(tool));
        Ok(())
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all registered tools as Tool objects for the MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: Some(tool.annotations()),
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct.
    ///
    /// A mismatch (missing required parameter, wrong type) is reported as
    /// an invalid-params error before any remote call happens.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response with text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Create an error response with the given error message
    pub fn create_error_response<T: Into<String>>(
        error: T,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent { text: error_text }),
                None,
            )],
            is_error: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingJira;
    use rmcp::model::RawContent;

    /// Mock tool for testing
    struct MockTool {
        name: &'static str,
        read_only: bool,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn title(&self) -> &'static str {
            "Mock Tool"
        }

        fn description(&self) -> &'static str {
            "A mock tool"
        }

        fn read_only(&self) -> bool {
            self.read_only
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
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(BaseToolImpl::create_success_response(format!(
                "Mock tool {} executed",
                self.name
            )))
        }
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_tool_registration() {
        let mut registry = ToolRegistry::new();
        registry
            .register(MockTool {
                name: "test_tool",
                read_only: true,
            })
            .unwrap();

        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
        assert!(registry.get_tool("test_tool").is_some());
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = ToolRegistry::new();
        registry
            .register(MockTool {
                name: "dup_tool",
                read_only: true,
            })
            .unwrap();

        let err = registry
            .register(MockTool {
                name: "dup_tool",
                read_only: false,
            })
            .unwrap_err();

        assert!(matches!(err, JiraError::DuplicateTool(name) if name == "dup_tool"));
        // Size never exceeds the number of unique names
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_tools_carries_annotations() {
        let mut registry = ToolRegistry::new();
        registry
            .register(MockTool {
                name: "ro_tool",
                read_only: true,
            })
            .unwrap();
        registry
            .register(MockTool {
                name: "rw_tool",
                read_only: false,
            })
            .unwrap();

        let tools = registry.list_tools();
        assert_eq!(tools.len(), 2);

        let ro = tools.iter().find(|t| t.name == "ro_tool").unwrap();
        let annotations = ro.annotations.as_ref().unwrap();
        assert_eq!(annotations.read_only_hint, Some(true));
        assert_eq!(annotations.destructive_hint, Some(false));

        let rw = tools.iter().find(|t| t.name == "rw_tool").unwrap();
        let annotations = rw.annotations.as_ref().unwrap();
        assert_eq!(annotations.read_only_hint, Some(false));
    }

    #[tokio::test]
    async fn test_tool_execution() {
        let context = ToolContext::new(Arc::new(RecordingJira::new()));
        let tool = MockTool {
            name: "exec_test",
            read_only: true,
        };

        let result = tool.execute(serde_json::Map::new(), &context).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(!result.content.is_empty());
    }

    #[test]
    fn test_base_tool_impl_parse_arguments() {
        use serde::Deserialize;

        #[derive(Deserialize, PartialEq, Debug)]
        struct TestArgs {
            name: String,
            count: Option<i32>,
        }

        let mut args = serde_json::Map::new();
        args.insert(
            "name".to_string(),
            serde_json::Value::String("test".to_string()),
        );
        args.insert(
            "count".to_string(),
            serde_json::Value::Number(serde_json::Number::from(42)),
        );

        let parsed: TestArgs = BaseToolImpl::parse_arguments(args).unwrap();
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.count, Some(42));
    }

    #[test]
    fn test_base_tool_impl_parse_arguments_error() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestArgs {
            #[serde(rename = "required_field")]
            _required_field: String,
        }

        let args = serde_json::Map::new(); // Missing required field
        let result: std::result::Result<TestArgs, McpError> = BaseToolImpl::parse_arguments(args);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_tool_impl_create_error_response_with_details() {
        let response = BaseToolImpl::create_error_response(
            "Error message",
            Some("Additional details".to_string()),
        );

        assert_eq!(response.is_error, Some(true));
        if let RawContent::Text(text_content) = &response.content[0].raw {
            assert_eq!(text_content.text, "Error message: Additional details");
        } else {
            panic!("Expected text content");
        }
    }
}
