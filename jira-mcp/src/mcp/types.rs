//! Request types for MCP tool operations
//!
//! Each tool deserializes its request struct from the incoming argument
//! map before touching the remote client; a mismatch never reaches the
//! network. Field maps for create/update stay open because the remote
//! schema is extensible and not fully known at build time.

use serde::Deserialize;
use serde_json::{Map, Value};

fn default_max_results() -> u64 {
    50
}

fn default_project_type() -> String {
    "software".to_string()
}

fn default_issue_type() -> String {
    "Task".to_string()
}

fn default_board_type() -> String {
    "scrum".to_string()
}

/// Request to search issues with a JQL query
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchIssuesRequest {
    /// JQL query string
    pub query: String,
    /// Offset of the first result to return
    #[serde(default)]
    pub start_at: u64,
    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: u64,
}

/// Request addressing a single issue by key
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IssueKeyRequest {
    /// Issue key, e.g. `PROJ-42`
    pub key: String,
}

/// Request to fetch one project
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetProjectRequest {
    /// Project key, e.g. `PROJ`
    pub key: String,
}

/// Request to create a project
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateProjectRequest {
    /// Project key, e.g. `PROJ`
    pub key: String,
    /// Display name
    pub name: String,
    /// Project type key
    #[serde(default = "default_project_type")]
    pub project_type: String,
    /// Account id of the project lead
    pub lead: Option<String>,
    /// Project template key
    pub template: Option<String>,
}

/// Request to create an issue from an open field map
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateIssueRequest {
    /// Issue fields, passed through to the remote schema
    pub fields: Map<String, Value>,
}

/// Request to create an issue from the minimal field set
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateSimpleIssueRequest {
    /// Project key the issue belongs to
    pub project: String,
    /// One-line summary
    pub summary: String,
    /// Issue type name
    #[serde(default = "default_issue_type")]
    pub issue_type: String,
    /// Optional longer description
    pub description: Option<String>,
}

/// Request to patch fields on an existing issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateIssueRequest {
    /// Issue key to update
    pub key: String,
    /// Fields to change, passed through to the remote schema
    pub fields: Map<String, Value>,
}

/// Request to set an issue's assignee
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssignIssueRequest {
    /// Issue key
    pub key: String,
    /// Account id of the new assignee
    pub assignee: String,
}

/// Request to execute a workflow transition
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TransitionIssueRequest {
    /// Issue key
    pub key: String,
    /// Transition id, as listed by get_issue_transitions
    pub transition: String,
}

/// Request to append a comment
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddCommentRequest {
    /// Issue key
    pub key: String,
    /// Comment body
    pub body: String,
}

/// Request to relate two issues
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateIssueLinkRequest {
    /// Link type name, e.g. `Blocks`
    pub link_type: String,
    /// Key of the inward issue
    pub inward_issue: String,
    /// Key of the outward issue
    pub outward_issue: String,
}

/// Request to attach a local file to an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddAttachmentRequest {
    /// Issue key
    pub key: String,
    /// Path of the local file to upload
    pub path: String,
}

/// Request to look up one account
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetUserRequest {
    /// Account id
    pub account_id: String,
}

/// Request to query accounts
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchUsersRequest {
    /// Query matched against display name and email
    pub query: String,
    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: u64,
}

/// Request to add an account to a group
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddUserToGroupRequest {
    /// Group name
    pub group: String,
    /// Account id to add
    pub account_id: String,
}

/// Request to create a project component
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateComponentRequest {
    /// Project key the component belongs to
    pub project: String,
    /// Component name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

/// Request to create a project version
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateVersionRequest {
    /// Project key the version belongs to
    pub project: String,
    /// Version name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

/// Request to list agile boards
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetBoardsRequest {
    /// Offset of the first result to return
    #[serde(default)]
    pub start_at: u64,
    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: u64,
}

/// Request to create an agile board
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateBoardRequest {
    /// Board name
    pub name: String,
    /// Board type
    #[serde(default = "default_board_type")]
    pub board_type: String,
    /// Id of the filter the board is built over
    pub filter_id: u64,
}

/// Request to list a board's sprints
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetSprintsRequest {
    /// Board id
    pub board_id: u64,
    /// Offset of the first result to return
    #[serde(default)]
    pub start_at: u64,
    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: u64,
}

/// Request to create a sprint
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateSprintRequest {
    /// Board the sprint belongs to
    pub board_id: u64,
    /// Sprint name
    pub name: String,
    /// Optional planned start date (ISO 8601)
    pub start_date: Option<String>,
    /// Optional planned end date (ISO 8601)
    pub end_date: Option<String>,
}

/// Request to move issues into a sprint
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddIssuesToSprintRequest {
    /// Sprint id
    pub sprint_id: u64,
    /// Issue keys to move
    pub issues: Vec<String>,
}

/// Request to add a watcher to an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddWatcherRequest {
    /// Issue key
    pub key: String,
    /// Account id of the watcher
    pub account_id: String,
}

/// Request to append a worklog entry
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddWorklogRequest {
    /// Issue key
    pub key: String,
    /// Time spent, e.g. `3h 20m`
    pub time_spent: String,
    /// Optional worklog comment
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_defaults() {
        let request: SearchIssuesRequest =
            serde_json::from_value(json!({ "query": "project = X" })).unwrap();
        assert_eq!(request.start_at, 0);
        assert_eq!(request.max_results, 50);
    }

    #[test]
    fn test_search_request_requires_query() {
        let result: Result<SearchIssuesRequest, _> = serde_json::from_value(json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_simple_issue_defaults_type() {
        let request: CreateSimpleIssueRequest =
            serde_json::from_value(json!({ "project": "X", "summary": "s" })).unwrap();
        assert_eq!(request.issue_type, "Task");
        assert!(request.description.is_none());
    }

    #[test]
    fn test_create_issue_keeps_field_map_open() {
        let request: CreateIssueRequest = serde_json::from_value(json!({
            "fields": {
                "summary": "s",
                "customfield_10010": { "value": "anything" }
            }
        }))
        .unwrap();
        assert!(request.fields.contains_key("customfield_10010"));
    }
}
