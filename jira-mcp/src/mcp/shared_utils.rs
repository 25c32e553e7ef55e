//! Shared utilities for MCP operations
//!
//! Common error mapping and request validation used across tool handlers
//! to keep failure reporting consistent.

use crate::error::JiraError;
use rmcp::Error as McpError;

/// Common error handling patterns for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a remote-call or internal error to the appropriate MCP error.
    ///
    /// User-addressable failures (bad credentials, missing entities,
    /// insufficient permission) map to request/param errors; everything
    /// else is an internal error. The message always carries the error
    /// kind so callers can distinguish the cases.
    pub fn handle_error(error: JiraError, operation: &str) -> McpError {
        tracing::error!("MCP operation '{}' failed: {}", operation, error);

        match error {
            JiraError::NotFound(_) => McpError::invalid_params(error.to_string(), None),
            JiraError::Unauthorized(_) | JiraError::PermissionDenied(_) => {
                McpError::invalid_request(error.to_string(), None)
            }
            JiraError::RateLimited(_)
            | JiraError::Api { .. }
            | JiraError::Transport(_)
            | JiraError::Json(_)
            | JiraError::Io(_)
            | JiraError::InvalidUrl { .. }
            | JiraError::DuplicateTool(_) => McpError::internal_error(error.to_string(), None),
        }
    }
}

/// Validation utilities for MCP requests
pub struct McpValidation;

impl McpValidation {
    /// Validate a string is not empty
    pub fn validate_not_empty(value: &str, field: &str) -> std::result::Result<(), McpError> {
        if value.trim().is_empty() {
            return Err(McpError::invalid_params(
                format!("{field} cannot be empty"),
                None,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_not_empty() {
        assert!(McpValidation::validate_not_empty("content", "field").is_ok());
        assert!(McpValidation::validate_not_empty("", "field").is_err());
        assert!(McpValidation::validate_not_empty("   ", "field").is_err());
    }

    #[test]
    fn test_error_mapping_keeps_kind_in_message() {
        let err = McpErrorHandler::handle_error(
            JiraError::from_status(401, "expired token".into()),
            "get_myself",
        );
        assert!(err.to_string().contains("Authentication failed"));

        let err = McpErrorHandler::handle_error(
            JiraError::from_status(429, "slow down".into()),
            "search_issues",
        );
        assert!(err.to_string().contains("Rate limited"));

        let err = McpErrorHandler::handle_error(
            JiraError::from_status(404, "no issue X-9".into()),
            "get_issue",
        );
        assert!(err.to_string().contains("Not found"));
    }
}
