//! CLI integration tests
//!
//! Exercises the built binary end to end: help output, completion
//! generation, and the fail-fast configuration guard behind `doctor` and
//! `serve`.

use assert_cmd::Command;
use predicates::prelude::*;

fn jira_mcp() -> Command {
    let mut cmd = Command::cargo_bin("jira-mcp").unwrap();
    // Isolate from the developer's real environment and any .env file
    for var in ["JIRA_EMAIL", "JIRA_HOST", "JIRA_TOKEN", "JIRA_CONTEXT"] {
        cmd.env_remove(var);
    }
    cmd.current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn test_help_lists_commands() {
    jira_mcp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("doctor"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_no_command_prints_help() {
    jira_mcp()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_doctor_with_empty_env_names_every_missing_variable() {
    jira_mcp()
        .arg("doctor")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("JIRA_EMAIL"))
        .stdout(predicate::str::contains("JIRA_HOST"))
        .stdout(predicate::str::contains("JIRA_TOKEN"));
}

#[test]
fn test_doctor_with_partial_env_names_only_the_missing_one() {
    jira_mcp()
        .arg("doctor")
        .env("JIRA_EMAIL", "a@b.com")
        .env("JIRA_HOST", "https://x.invalid")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("JIRA_TOKEN").and(predicate::str::contains("not set")));
}

#[test]
fn test_serve_with_empty_env_is_a_fatal_configuration_error() {
    jira_mcp()
        .arg("serve")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(
            predicate::str::contains("JIRA_EMAIL")
                .and(predicate::str::contains("JIRA_HOST"))
                .and(predicate::str::contains("JIRA_TOKEN")),
        );
}

#[test]
fn test_completion_generates_bash_script() {
    jira_mcp()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jira-mcp"));
}

#[test]
fn test_version_flag() {
    jira_mcp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jira-mcp"));
}
