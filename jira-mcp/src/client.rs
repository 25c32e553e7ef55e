//! Remote issue-tracker client
//!
//! [`JiraApi`] is the full operation surface the tool catalog dispatches to;
//! [`JiraClient`] implements it over HTTP with basic authentication. Each
//! method performs exactly one logical remote operation with no retry,
//! backoff, or caching of its own — resilience belongs to the caller or the
//! remote service, not this layer.

use crate::config::JiraConfig;
use crate::error::{JiraError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use url::Url;

/// One page of issue search results, as returned by the remote JQL search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Offset of the first returned issue
    #[serde(default)]
    pub start_at: u64,
    /// Page size the remote applied
    #[serde(default)]
    pub max_results: u64,
    /// Total matches across all pages
    #[serde(default)]
    pub total: u64,
    /// Matched issues, in remote order
    #[serde(default)]
    pub issues: Vec<SearchedIssue>,
}

/// A single issue row within a [`SearchPage`].
#[derive(Debug, Clone, Deserialize)]
pub struct SearchedIssue {
    /// Issue key, e.g. `PROJ-42`
    pub key: String,
    /// The issue's field map; the remote schema is extensible so this stays open
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl SearchedIssue {
    /// The issue summary, when the remote included one.
    pub fn summary(&self) -> Option<&str> {
        self.fields.get("summary").and_then(Value::as_str)
    }
}

/// Operation surface of the remote issue tracker.
///
/// Tool handlers receive this as `Arc<dyn JiraApi>` through their
/// `ToolContext`, which keeps the shared client an explicit dependency and
/// lets tests substitute a recording fake.
#[async_trait]
pub trait JiraApi: Send + Sync {
    /// Search issues with a JQL query and pagination window.
    async fn search_issues(&self, jql: &str, start_at: u64, max_results: u64)
        -> Result<SearchPage>;

    /// Remote server metadata.
    async fn server_info(&self) -> Result<Value>;

    /// Identity of the authenticated caller.
    async fn myself(&self) -> Result<Value>;

    /// List all visible projects.
    async fn projects(&self) -> Result<Value>;

    /// Fetch one project by key.
    async fn project(&self, key: &str) -> Result<Value>;

    /// Create a project from a prepared body.
    async fn create_project(&self, body: Value) -> Result<Value>;

    /// List a project's components.
    async fn project_components(&self, key: &str) -> Result<Value>;

    /// List a project's versions.
    async fn project_versions(&self, key: &str) -> Result<Value>;

    /// Create a component within a project.
    async fn create_component(&self, body: Value) -> Result<Value>;

    /// Create a version within a project.
    async fn create_version(&self, body: Value) -> Result<Value>;

    /// Fetch full issue detail by key.
    async fn issue(&self, key: &str) -> Result<Value>;

    /// Create an issue from an open field map.
    async fn create_issue(&self, fields: Map<String, Value>) -> Result<Value>;

    /// Patch arbitrary fields on an existing issue.
    async fn update_issue(&self, key: &str, fields: Map<String, Value>) -> Result<Value>;

    /// Set an issue's assignee.
    async fn assign_issue(&self, key: &str, assignee: &str) -> Result<Value>;

    /// List the workflow transitions currently available on an issue.
    async fn issue_transitions(&self, key: &str) -> Result<Value>;

    /// Execute one workflow transition on an issue.
    async fn transition_issue(&self, key: &str, transition_id: &str) -> Result<Value>;

    /// List an issue's comments.
    async fn issue_comments(&self, key: &str) -> Result<Value>;

    /// Append a comment to an issue.
    async fn add_comment(&self, key: &str, body: &str) -> Result<Value>;

    /// Relate two issues with a named link type.
    async fn create_issue_link(
        &self,
        link_type: &str,
        inward_key: &str,
        outward_key: &str,
    ) -> Result<Value>;

    /// Attach a file's contents to an issue.
    async fn add_attachment(&self, key: &str, file_name: &str, content: Vec<u8>)
        -> Result<Value>;

    /// List an issue's watchers.
    async fn watchers(&self, key: &str) -> Result<Value>;

    /// Add a watcher to an issue.
    async fn add_watcher(&self, key: &str, account_id: &str) -> Result<Value>;

    /// List an issue's worklog entries.
    async fn worklogs(&self, key: &str) -> Result<Value>;

    /// Append a worklog entry to an issue.
    async fn add_worklog(
        &self,
        key: &str,
        time_spent: &str,
        comment: Option<&str>,
    ) -> Result<Value>;

    /// Look up one account.
    async fn user(&self, account_id: &str) -> Result<Value>;

    /// Query accounts by display name or email.
    async fn search_users(&self, query: &str, max_results: u64) -> Result<Value>;

    /// List groups.
    async fn groups(&self) -> Result<Value>;

    /// Add an account to a group.
    async fn add_user_to_group(&self, group_name: &str, account_id: &str) -> Result<Value>;

    /// The caller's favourite (saved) filters.
    async fn favourite_filters(&self) -> Result<Value>;

    /// Field metadata, including custom fields.
    async fn fields(&self) -> Result<Value>;

    /// Issue type taxonomy.
    async fn issue_types(&self) -> Result<Value>;

    /// Priority taxonomy.
    async fn priorities(&self) -> Result<Value>;

    /// Status taxonomy.
    async fn statuses(&self) -> Result<Value>;

    /// Resolution taxonomy.
    async fn resolutions(&self) -> Result<Value>;

    /// List agile boards with a pagination window.
    async fn boards(&self, start_at: u64, max_results: u64) -> Result<Value>;

    /// Create an agile board over a filter.
    async fn create_board(&self, name: &str, board_type: &str, filter_id: u64) -> Result<Value>;

    /// List a board's sprints with a pagination window.
    async fn sprints(&self, board_id: u64, start_at: u64, max_results: u64) -> Result<Value>;

    /// Create a sprint on a board.
    async fn create_sprint(
        &self,
        board_id: u64,
        name: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Value>;

    /// Move issues into a sprint.
    async fn add_issues_to_sprint(&self, sprint_id: u64, issue_keys: &[String]) -> Result<Value>;

    /// Service-desk subsystem metadata. Deployments without the subsystem
    /// answer 404/501 here.
    async fn service_desk_info(&self) -> Result<Value>;

    /// List service desks. Deployments without the subsystem answer 404/501.
    async fn service_desks(&self) -> Result<Value>;
}

/// Authenticated HTTP client for the remote issue tracker.
///
/// Connection pooling and keep-alive are reqwest's concern; this type only
/// knows how to address endpoints and classify failures.
#[derive(Debug)]
pub struct JiraClient {
    http: reqwest::Client,
    base: String,
    email: String,
    token: String,
}

impl JiraClient {
    /// Build a client from validated configuration.
    pub fn new(config: &JiraConfig) -> Result<Self> {
        let base = config.base_url();
        Url::parse(&base).map_err(|e| JiraError::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base,
            email: config.email.clone(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Send a prepared request and classify the response.
    ///
    /// Empty success bodies (204 responses) come back as `Value::Null`.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request
            .basic_auth(&self.email, Some(&self.token))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!("remote call failed: {} {}", status.as_u16(), body);
            return Err(JiraError::from_status(status.as_u16(), body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn get(&self, path: &str) -> Result<Value> {
        self.execute(self.http.get(self.url(path))).await
    }

    async fn get_query(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        self.execute(self.http.get(self.url(path)).query(query)).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.execute(self.http.post(self.url(path)).json(&body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.execute(self.http.put(self.url(path)).json(&body)).await
    }
}

#[async_trait]
impl JiraApi for JiraClient {
    async fn search_issues(
        &self,
        jql: &str,
        start_at: u64,
        max_results: u64,
    ) -> Result<SearchPage> {
        let value = self
            .get_query(
                "/rest/api/2/search",
                &[
                    ("jql", jql.to_string()),
                    ("startAt", start_at.to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn server_info(&self) -> Result<Value> {
        self.get("/rest/api/2/serverInfo").await
    }

    async fn myself(&self) -> Result<Value> {
        self.get("/rest/api/2/myself").await
    }

    async fn projects(&self) -> Result<Value> {
        self.get("/rest/api/2/project").await
    }

    async fn project(&self, key: &str) -> Result<Value> {
        self.get(&format!("/rest/api/2/project/{key}")).await
    }

    async fn create_project(&self, body: Value) -> Result<Value> {
        self.post("/rest/api/2/project", body).await
    }

    async fn project_components(&self, key: &str) -> Result<Value> {
        self.get(&format!("/rest/api/2/project/{key}/components")).await
    }

    async fn project_versions(&self, key: &str) -> Result<Value> {
        self.get(&format!("/rest/api/2/project/{key}/versions")).await
    }

    async fn create_component(&self, body: Value) -> Result<Value> {
        self.post("/rest/api/2/component", body).await
    }

    async fn create_version(&self, body: Value) -> Result<Value> {
        self.post("/rest/api/2/version", body).await
    }

    async fn issue(&self, key: &str) -> Result<Value> {
        self.get(&format!("/rest/api/2/issue/{key}")).await
    }

    async fn create_issue(&self, fields: Map<String, Value>) -> Result<Value> {
        self.post("/rest/api/2/issue", json!({ "fields": fields })).await
    }

    async fn update_issue(&self, key: &str, fields: Map<String, Value>) -> Result<Value> {
        self.put(
            &format!("/rest/api/2/issue/{key}"),
            json!({ "fields": fields }),
        )
        .await
    }

    async fn assign_issue(&self, key: &str, assignee: &str) -> Result<Value> {
        self.put(
            &format!("/rest/api/2/issue/{key}/assignee"),
            json!({ "accountId": assignee }),
        )
        .await
    }

    async fn issue_transitions(&self, key: &str) -> Result<Value> {
        self.get(&format!("/rest/api/2/issue/{key}/transitions")).await
    }

    async fn transition_issue(&self, key: &str, transition_id: &str) -> Result<Value> {
        self.post(
            &format!("/rest/api/2/issue/{key}/transitions"),
            json!({ "transition": { "id": transition_id } }),
        )
        .await
    }

    async fn issue_comments(&self, key: &str) -> Result<Value> {
        self.get(&format!("/rest/api/2/issue/{key}/comment")).await
    }

    async fn add_comment(&self, key: &str, body: &str) -> Result<Value> {
        self.post(
            &format!("/rest/api/2/issue/{key}/comment"),
            json!({ "body": body }),
        )
        .await
    }

    async fn create_issue_link(
        &self,
        link_type: &str,
        inward_key: &str,
        outward_key: &str,
    ) -> Result<Value> {
        self.post(
            "/rest/api/2/issueLink",
            json!({
                "type": { "name": link_type },
                "inwardIssue": { "key": inward_key },
                "outwardIssue": { "key": outward_key },
            }),
        )
        .await
    }

    async fn add_attachment(
        &self,
        key: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<Value> {
        let part = reqwest::multipart::Part::bytes(content).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let request = self
            .http
            .post(self.url(&format!("/rest/api/2/issue/{key}/attachments")))
            // The remote rejects attachment uploads without this header
            .header("X-Atlassian-Token", "no-check")
            .multipart(form);
        self.execute(request).await
    }

    async fn watchers(&self, key: &str) -> Result<Value> {
        self.get(&format!("/rest/api/2/issue/{key}/watchers")).await
    }

    async fn add_watcher(&self, key: &str, account_id: &str) -> Result<Value> {
        self.post(
            &format!("/rest/api/2/issue/{key}/watchers"),
            Value::String(account_id.to_string()),
        )
        .await
    }

    async fn worklogs(&self, key: &str) -> Result<Value> {
        self.get(&format!("/rest/api/2/issue/{key}/worklog")).await
    }

    async fn add_worklog(
        &self,
        key: &str,
        time_spent: &str,
        comment: Option<&str>,
    ) -> Result<Value> {
        let mut body = json!({ "timeSpent": time_spent });
        if let Some(comment) = comment {
            body["comment"] = Value::String(comment.to_string());
        }
        self.post(&format!("/rest/api/2/issue/{key}/worklog"), body).await
    }

    async fn user(&self, account_id: &str) -> Result<Value> {
        self.get_query(
            "/rest/api/2/user",
            &[("accountId", account_id.to_string())],
        )
        .await
    }

    async fn search_users(&self, query: &str, max_results: u64) -> Result<Value> {
        self.get_query(
            "/rest/api/2/user/search",
            &[
                ("query", query.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
        .await
    }

    async fn groups(&self) -> Result<Value> {
        self.get("/rest/api/2/groups/picker").await
    }

    async fn add_user_to_group(&self, group_name: &str, account_id: &str) -> Result<Value> {
        let request = self
            .http
            .post(self.url("/rest/api/2/group/user"))
            .query(&[("groupname", group_name)])
            .json(&json!({ "accountId": account_id }));
        self.execute(request).await
    }

    async fn favourite_filters(&self) -> Result<Value> {
        self.get("/rest/api/2/filter/favourite").await
    }

    async fn fields(&self) -> Result<Value> {
        self.get("/rest/api/2/field").await
    }

    async fn issue_types(&self) -> Result<Value> {
        self.get("/rest/api/2/issuetype").await
    }

    async fn priorities(&self) -> Result<Value> {
        self.get("/rest/api/2/priority").await
    }

    async fn statuses(&self) -> Result<Value> {
        self.get("/rest/api/2/status").await
    }

    async fn resolutions(&self) -> Result<Value> {
        self.get("/rest/api/2/resolution").await
    }

    async fn boards(&self, start_at: u64, max_results: u64) -> Result<Value> {
        self.get_query(
            "/rest/agile/1.0/board",
            &[
                ("startAt", start_at.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
        .await
    }

    async fn create_board(&self, name: &str, board_type: &str, filter_id: u64) -> Result<Value> {
        self.post(
            "/rest/agile/1.0/board",
            json!({ "name": name, "type": board_type, "filterId": filter_id }),
        )
        .await
    }

    async fn sprints(&self, board_id: u64, start_at: u64, max_results: u64) -> Result<Value> {
        self.get_query(
            &format!("/rest/agile/1.0/board/{board_id}/sprint"),
            &[
                ("startAt", start_at.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
        .await
    }

    async fn create_sprint(
        &self,
        board_id: u64,
        name: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Value> {
        let mut body = json!({ "name": name, "originBoardId": board_id });
        if let Some(start) = start_date {
            body["startDate"] = Value::String(start.to_string());
        }
        if let Some(end) = end_date {
            body["endDate"] = Value::String(end.to_string());
        }
        self.post("/rest/agile/1.0/sprint", body).await
    }

    async fn add_issues_to_sprint(&self, sprint_id: u64, issue_keys: &[String]) -> Result<Value> {
        self.post(
            &format!("/rest/agile/1.0/sprint/{sprint_id}/issue"),
            json!({ "issues": issue_keys }),
        )
        .await
    }

    async fn service_desk_info(&self) -> Result<Value> {
        self.get("/rest/servicedeskapi/info").await
    }

    async fn service_desks(&self) -> Result<Value> {
        self.get("/rest/servicedeskapi/servicedesk").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ENV_CONTEXT, ENV_EMAIL, ENV_HOST, ENV_TOKEN};

    fn test_config(host: &str, context: &str) -> JiraConfig {
        JiraConfig::from_lookup(|key| match key {
            k if k == ENV_EMAIL => Some("a@b.com".to_string()),
            k if k == ENV_HOST => Some(host.to_string()),
            k if k == ENV_TOKEN => Some("secret".to_string()),
            k if k == ENV_CONTEXT => Some(context.to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_client_url_building() {
        let client = JiraClient::new(&test_config("https://x.example/", "")).unwrap();
        assert_eq!(
            client.url("/rest/api/2/serverInfo"),
            "https://x.example/rest/api/2/serverInfo"
        );
    }

    #[test]
    fn test_client_url_with_context_prefix() {
        let client = JiraClient::new(&test_config("https://x.example", "/jira/")).unwrap();
        assert_eq!(
            client.url("/rest/api/2/myself"),
            "https://x.example/jira/rest/api/2/myself"
        );
    }

    #[test]
    fn test_client_rejects_invalid_host() {
        let err = JiraClient::new(&test_config("not a url", "")).unwrap_err();
        assert!(matches!(err, JiraError::InvalidUrl { .. }));
    }

    #[test]
    fn test_search_page_deserialization() {
        let value = json!({
            "startAt": 0,
            "maxResults": 50,
            "total": 2,
            "issues": [
                { "key": "X-1", "fields": { "summary": "a" } },
                { "key": "X-2", "fields": { "summary": "b" } }
            ]
        });
        let page: SearchPage = serde_json::from_value(value).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.issues[0].key, "X-1");
        assert_eq!(page.issues[0].summary(), Some("a"));
        assert_eq!(page.issues[1].summary(), Some("b"));
    }

    #[test]
    fn test_search_page_tolerates_missing_fields() {
        let page: SearchPage = serde_json::from_value(json!({ "issues": [] })).unwrap();
        assert_eq!(page.total, 0);
        assert!(page.issues.is_empty());
    }
}
