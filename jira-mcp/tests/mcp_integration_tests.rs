//! Integration tests driving the MCP server against a recording fake
//!
//! These exercise the full dispatch path: registry lookup, argument
//! validation, handler execution, response reshaping, and error mapping.

use jira_mcp::test_utils::RecordingJira;
use jira_mcp::{JiraApi, McpServer};
use rmcp::model::RawContent;
use serde_json::{json, Map, Value};
use std::sync::Arc;

fn server_with_fake() -> (McpServer, Arc<RecordingJira>) {
    let fake = Arc::new(RecordingJira::new());
    let server = McpServer::with_client(fake.clone() as Arc<dyn JiraApi>).unwrap();
    (server, fake)
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn payload_of(result: &rmcp::model::CallToolResult) -> Value {
    let RawContent::Text(text) = &result.content[0].raw else {
        panic!("expected text content");
    };
    serde_json::from_str(&text.text).unwrap_or(Value::String(text.text.clone()))
}

#[tokio::test]
async fn test_search_issues_end_to_end() {
    let (server, fake) = server_with_fake();
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

    let result = server
        .dispatch(
            "search_issues",
            args(json!({ "query": "project = X", "start_at": 0, "max_results": 50 })),
        )
        .await
        .unwrap();

    let payload = payload_of(&result);
    assert_eq!(
        payload["issues"],
        json!([
            { "key": "X-1", "summary": "a" },
            { "key": "X-2", "summary": "b" }
        ])
    );
}

#[tokio::test]
async fn test_get_issue_round_trip() {
    let (server, fake) = server_with_fake();
    fake.respond_with(
        "get_issue",
        json!({ "key": "X-1", "fields": { "summary": "a", "status": { "name": "Open" } } }),
    );

    let result = server
        .dispatch("get_issue", args(json!({ "key": "X-1" })))
        .await
        .unwrap();

    let payload = payload_of(&result);
    assert_eq!(payload["key"], json!("X-1"));
    assert_eq!(fake.call_args("get_issue").unwrap(), json!({ "key": "X-1" }));
}

#[tokio::test]
async fn test_transition_flow_lists_then_executes() {
    let (server, fake) = server_with_fake();
    fake.respond_with(
        "get_issue_transitions",
        json!({ "transitions": [{ "id": "31", "name": "Done" }] }),
    );

    server
        .dispatch("get_issue_transitions", args(json!({ "key": "X-1" })))
        .await
        .unwrap();
    server
        .dispatch(
            "transition_issue",
            args(json!({ "key": "X-1", "transition": "31" })),
        )
        .await
        .unwrap();

    assert_eq!(
        fake.calls(),
        vec![
            "get_issue_transitions".to_string(),
            "transition_issue".to_string()
        ]
    );
    assert_eq!(
        fake.call_args("transition_issue").unwrap(),
        json!({ "key": "X-1", "transition": "31" })
    );
}

#[tokio::test]
async fn test_mutating_tool_arguments_are_forwarded_verbatim() {
    let (server, fake) = server_with_fake();

    server
        .dispatch(
            "update_issue",
            args(json!({
                "key": "X-1",
                "fields": { "summary": "new", "customfield_10010": [1, 2] }
            })),
        )
        .await
        .unwrap();

    let sent = fake.call_args("update_issue").unwrap();
    assert_eq!(sent["fields"]["customfield_10010"], json!([1, 2]));
}

#[tokio::test]
async fn test_unknown_tool_is_rejected_without_side_effects() {
    let (server, fake) = server_with_fake();
    let err = server
        .dispatch("delete_everything", Map::new())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Unknown tool"));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_validation_error_reaches_no_remote_call() {
    let (server, fake) = server_with_fake();

    for (tool, bad_args) in [
        ("search_issues", json!({})),
        ("get_issue", json!({})),
        ("update_issue", json!({ "key": "X-1" })),
        ("assign_issue", json!({ "key": "X-1" })),
        ("add_comment", json!({ "key": "X-1" })),
        ("create_sprint", json!({ "name": "no board" })),
    ] {
        let result = server.dispatch(tool, args(bad_args)).await;
        assert!(result.is_err(), "{tool} should reject bad arguments");
    }

    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_remote_error_kinds_are_distinguishable() {
    let (server, fake) = server_with_fake();

    fake.fail_with_status("get_issue", 404, "Issue does not exist");
    let err = server
        .dispatch("get_issue", args(json!({ "key": "X-404" })))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Not found"));

    let (server, fake) = server_with_fake();
    fake.fail_with_status("get_issue", 403, "No browse permission");
    let err = server
        .dispatch("get_issue", args(json!({ "key": "X-1" })))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Permission denied"));
}

#[tokio::test]
async fn test_service_desk_absence_is_an_empty_result() {
    let (server, fake) = server_with_fake();
    fake.fail_with_status("get_service_desks", 404, "unsupported");
    fake.fail_with_status("check_service_desk_support", 501, "unsupported");

    let result = server.dispatch("get_service_desks", Map::new()).await.unwrap();
    assert_eq!(payload_of(&result), json!([]));

    let result = server
        .dispatch("check_service_desk_support", Map::new())
        .await
        .unwrap();
    assert_eq!(payload_of(&result)["supported"], json!(false));
}

#[tokio::test]
async fn test_list_tools_advertises_catalog_with_annotations() {
    let (server, _) = server_with_fake();
    let tools = server.tools();
    assert!(tools.len() >= 35);

    // Every advertised tool carries an accurate read-only/mutating flag
    for tool in &tools {
        let annotations = tool
            .annotations
            .as_ref()
            .unwrap_or_else(|| panic!("{} has no annotations", tool.name));
        assert!(
            annotations.read_only_hint.is_some(),
            "{} has no read-only classification",
            tool.name
        );
    }

    let update = tools.iter().find(|t| t.name == "update_issue").unwrap();
    assert_eq!(
        update.annotations.as_ref().unwrap().read_only_hint,
        Some(false)
    );
    let search = tools.iter().find(|t| t.name == "search_issues").unwrap();
    assert_eq!(
        search.annotations.as_ref().unwrap().read_only_hint,
        Some(true)
    );
}

#[tokio::test]
async fn test_idempotency_is_not_provided_locally() {
    // Calling a create twice performs two remote calls; dedup belongs to
    // the remote service.
    let (server, fake) = server_with_fake();
    let create = json!({
        "fields": {
            "project": { "key": "X" },
            "summary": "same summary",
            "issuetype": { "name": "Task" }
        }
    });

    server.dispatch("create_issue", args(create.clone())).await.unwrap();
    server.dispatch("create_issue", args(create)).await.unwrap();

    assert_eq!(fake.calls().len(), 2);
}
