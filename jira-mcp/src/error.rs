//! Unified error handling for the Jira MCP library
//!
//! Remote-call failures keep enough structure to distinguish authentication,
//! permission, not-found, and rate-limit rejections from generic API errors.

use thiserror::Error;

/// The main error type for the Jira MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JiraError {
    /// The remote service rejected the credentials
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// The authenticated caller lacks permission for the operation
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The addressed entity does not exist on the remote service
    #[error("Not found: {0}")]
    NotFound(String),

    /// The remote service throttled the request
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success response from the remote service
    #[error("Remote API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the remote service
        status: u16,
        /// Response body, as returned by the remote service
        message: String,
    },

    /// The request never produced a response (DNS, TLS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured host is not a valid base URL
    #[error("Invalid host URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL string
        url: String,
        /// Parse failure detail
        reason: String,
    },

    /// Two tools were registered under the same name
    #[error("Duplicate tool registration: {0}")]
    DuplicateTool(String),
}

impl JiraError {
    /// Classify a non-success HTTP response by status code
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => JiraError::Unauthorized(message),
            403 => JiraError::PermissionDenied(message),
            404 => JiraError::NotFound(message),
            429 => JiraError::RateLimited(message),
            _ => JiraError::Api { status, message },
        }
    }

    /// True when the error denotes an absent optional subsystem (the
    /// service-desk discovery endpoints report this as 404 or 501)
    pub fn is_subsystem_absent(&self) -> bool {
        match self {
            JiraError::NotFound(_) => true,
            JiraError::Api { status, .. } => *status == 501,
            _ => false,
        }
    }
}

/// Result type alias for Jira MCP operations
pub type Result<T> = std::result::Result<T, JiraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_distinguishes_remote_failures() {
        assert!(matches!(
            JiraError::from_status(401, "bad token".into()),
            JiraError::Unauthorized(_)
        ));
        assert!(matches!(
            JiraError::from_status(403, "no browse permission".into()),
            JiraError::PermissionDenied(_)
        ));
        assert!(matches!(
            JiraError::from_status(404, "no such issue".into()),
            JiraError::NotFound(_)
        ));
        assert!(matches!(
            JiraError::from_status(429, "too many requests".into()),
            JiraError::RateLimited(_)
        ));
        assert!(matches!(
            JiraError::from_status(500, "boom".into()),
            JiraError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn test_subsystem_absent_classification() {
        assert!(JiraError::from_status(404, "".into()).is_subsystem_absent());
        assert!(JiraError::from_status(501, "".into()).is_subsystem_absent());
        assert!(!JiraError::from_status(403, "".into()).is_subsystem_absent());
        assert!(!JiraError::from_status(500, "".into()).is_subsystem_absent());
    }

    #[test]
    fn test_error_display_includes_status() {
        let err = JiraError::from_status(502, "bad gateway".into());
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("bad gateway"));
    }
}
