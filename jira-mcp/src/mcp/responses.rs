//! Response creation utilities for MCP operations

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent};
use serde_json::Value;

/// Create a success response carrying a JSON payload as text content.
pub fn json_response(value: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text }),
            None,
        )],
        is_error: Some(false),
    }
}

/// Create a success response with a plain message.
pub fn message_response(message: impl Into<String>) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent {
                text: message.into(),
            }),
            None,
        )],
        is_error: Some(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_response_serializes_payload() {
        let response = json_response(&json!({ "key": "X-1" }));
        assert_eq!(response.is_error, Some(false));
        if let RawContent::Text(text) = &response.content[0].raw {
            assert!(text.text.contains("X-1"));
        } else {
            panic!("Expected text content");
        }
    }

    #[test]
    fn test_message_response() {
        let response = message_response("done");
        assert_eq!(response.is_error, Some(false));
    }
}
