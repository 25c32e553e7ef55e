//! Test utilities for exercising the tool catalog without a remote service.
//!
//! [`RecordingJira`] implements [`JiraApi`] in memory: every call is logged
//! with its arguments, and responses or failures are configured per
//! operation. Tests use the call log to assert dispatch behavior, including
//! that validation failures perform zero remote calls.

use crate::client::{JiraApi, SearchPage};
use crate::error::{JiraError, Result};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory [`JiraApi`] fake with canned responses and a call log.
#[derive(Default)]
pub struct RecordingJira {
    calls: Mutex<Vec<(String, Value)>>,
    responses: Mutex<HashMap<String, Value>>,
    failures: Mutex<HashMap<String, (u16, String)>>,
}

impl RecordingJira {
    /// Create an empty fake; every operation answers `Value::Null` until
    /// configured otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response for one operation.
    pub fn respond_with(&self, operation: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(operation.to_string(), value);
    }

    /// Configure one operation to fail with the given HTTP status.
    pub fn fail_with_status(&self, operation: &str, status: u16, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(operation.to_string(), (status, message.to_string()));
    }

    /// Names of all operations invoked so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Arguments recorded for the first invocation of an operation.
    pub fn call_args(&self, operation: &str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == operation)
            .map(|(_, args)| args.clone())
    }

    fn record(&self, operation: &str, args: Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), args));

        if let Some((status, message)) = self.failures.lock().unwrap().get(operation) {
            return Err(JiraError::from_status(*status, message.clone()));
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(operation)
            .cloned()
            .unwrap_or(Value::Null))
    }
}

#[async_trait]
impl JiraApi for RecordingJira {
    async fn search_issues(
        &self,
        jql: &str,
        start_at: u64,
        max_results: u64,
    ) -> Result<SearchPage> {
        let value = self.record(
            "search_issues",
            json!({ "jql": jql, "start_at": start_at, "max_results": max_results }),
        )?;
        if value.is_null() {
            return Ok(serde_json::from_value(json!({ "issues": [] }))?);
        }
        Ok(serde_json::from_value(value)?)
    }

    async fn server_info(&self) -> Result<Value> {
        self.record("get_server_info", json!({}))
    }

    async fn myself(&self) -> Result<Value> {
        self.record("get_myself", json!({}))
    }

    async fn projects(&self) -> Result<Value> {
        self.record("get_projects", json!({}))
    }

    async fn project(&self, key: &str) -> Result<Value> {
        self.record("get_project", json!({ "key": key }))
    }

    async fn create_project(&self, body: Value) -> Result<Value> {
        self.record("create_project", body)
    }

    async fn project_components(&self, key: &str) -> Result<Value> {
        self.record("get_project_components", json!({ "key": key }))
    }

    async fn project_versions(&self, key: &str) -> Result<Value> {
        self.record("get_project_versions", json!({ "key": key }))
    }

    async fn create_component(&self, body: Value) -> Result<Value> {
        self.record("create_component", body)
    }

    async fn create_version(&self, body: Value) -> Result<Value> {
        self.record("create_version", body)
    }

    async fn issue(&self, key: &str) -> Result<Value> {
        self.record("get_issue", json!({ "key": key }))
    }

    async fn create_issue(&self, fields: Map<String, Value>) -> Result<Value> {
        self.record("create_issue", Value::Object(fields))
    }

    async fn update_issue(&self, key: &str, fields: Map<String, Value>) -> Result<Value> {
        self.record(
            "update_issue",
            json!({ "key": key, "fields": Value::Object(fields) }),
        )
    }

    async fn assign_issue(&self, key: &str, assignee: &str) -> Result<Value> {
        self.record("assign_issue", json!({ "key": key, "assignee": assignee }))
    }

    async fn issue_transitions(&self, key: &str) -> Result<Value> {
        self.record("get_issue_transitions", json!({ "key": key }))
    }

    async fn transition_issue(&self, key: &str, transition_id: &str) -> Result<Value> {
        self.record(
            "transition_issue",
            json!({ "key": key, "transition": transition_id }),
        )
    }

    async fn issue_comments(&self, key: &str) -> Result<Value> {
        self.record("get_issue_comments", json!({ "key": key }))
    }

    async fn add_comment(&self, key: &str, body: &str) -> Result<Value> {
        self.record("add_comment", json!({ "key": key, "body": body }))
    }

    async fn create_issue_link(
        &self,
        link_type: &str,
        inward_key: &str,
        outward_key: &str,
    ) -> Result<Value> {
        self.record(
            "create_issue_link",
            json!({ "link_type": link_type, "inward": inward_key, "outward": outward_key }),
        )
    }

    async fn add_attachment(
        &self,
        key: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<Value> {
        self.record(
            "add_attachment",
            json!({ "key": key, "file_name": file_name, "size": content.len() }),
        )
    }

    async fn watchers(&self, key: &str) -> Result<Value> {
        self.record("get_watchers", json!({ "key": key }))
    }

    async fn add_watcher(&self, key: &str, account_id: &str) -> Result<Value> {
        self.record(
            "add_watcher",
            json!({ "key": key, "account_id": account_id }),
        )
    }

    async fn worklogs(&self, key: &str) -> Result<Value> {
        self.record("get_worklogs", json!({ "key": key }))
    }

    async fn add_worklog(
        &self,
        key: &str,
        time_spent: &str,
        comment: Option<&str>,
    ) -> Result<Value> {
        self.record(
            "add_worklog",
            json!({ "key": key, "time_spent": time_spent, "comment": comment }),
        )
    }

    async fn user(&self, account_id: &str) -> Result<Value> {
        self.record("get_user", json!({ "account_id": account_id }))
    }

    async fn search_users(&self, query: &str, max_results: u64) -> Result<Value> {
        self.record(
            "search_users",
            json!({ "query": query, "max_results": max_results }),
        )
    }

    async fn groups(&self) -> Result<Value> {
        self.record("get_groups", json!({}))
    }

    async fn add_user_to_group(&self, group_name: &str, account_id: &str) -> Result<Value> {
        self.record(
            "add_user_to_group",
            json!({ "group": group_name, "account_id": account_id }),
        )
    }

    async fn favourite_filters(&self) -> Result<Value> {
        self.record("get_favorite_filters", json!({}))
    }

    async fn fields(&self) -> Result<Value> {
        self.record("get_fields", json!({}))
    }

    async fn issue_types(&self) -> Result<Value> {
        self.record("get_issue_types", json!({}))
    }

    async fn priorities(&self) -> Result<Value> {
        self.record("get_priorities", json!({}))
    }

    async fn statuses(&self) -> Result<Value> {
        self.record("get_statuses", json!({}))
    }

    async fn resolutions(&self) -> Result<Value> {
        self.record("get_resolutions", json!({}))
    }

    async fn boards(&self, start_at: u64, max_results: u64) -> Result<Value> {
        self.record(
            "get_boards",
            json!({ "start_at": start_at, "max_results": max_results }),
        )
    }

    async fn create_board(&self, name: &str, board_type: &str, filter_id: u64) -> Result<Value> {
        self.record(
            "create_board",
            json!({ "name": name, "board_type": board_type, "filter_id": filter_id }),
        )
    }

    async fn sprints(&self, board_id: u64, start_at: u64, max_results: u64) -> Result<Value> {
        self.record(
            "get_sprints",
            json!({ "board_id": board_id, "start_at": start_at, "max_results": max_results }),
        )
    }

    async fn create_sprint(
        &self,
        board_id: u64,
        name: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Value> {
        self.record(
            "create_sprint",
            json!({
                "board_id": board_id,
                "name": name,
                "start_date": start_date,
                "end_date": end_date
            }),
        )
    }

    async fn add_issues_to_sprint(&self, sprint_id: u64, issue_keys: &[String]) -> Result<Value> {
        self.record(
            "add_issues_to_sprint",
            json!({ "sprint_id": sprint_id, "issues": issue_keys }),
        )
    }

    async fn service_desk_info(&self) -> Result<Value> {
        self.record("check_service_desk_support", json!({}))
    }

    async fn service_desks(&self) -> Result<Value> {
        self.record("get_service_desks", json!({}))
    }
}
