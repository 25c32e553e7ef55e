//! Doctor command: configuration and connectivity diagnostics
//!
//! Checks each required environment variable and reports every missing one,
//! then verifies connectivity and authentication against the remote
//! tracker. Exit codes: 0 all checks passed, 1 warnings, 2 errors.

use anyhow::Result;
use colored::*;
use jira_mcp::config::{ENV_CONTEXT, ENV_EMAIL, ENV_HOST, ENV_TOKEN};
use jira_mcp::{JiraApi, JiraClient, JiraConfig};

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};

/// Status of one diagnostic check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed without issues
    Ok,
    /// Check passed but with potential issues
    Warning,
    /// Check failed with errors
    Error,
}

/// Result of one diagnostic check
#[derive(Debug, Clone)]
pub struct Check {
    /// Name of the check performed
    pub name: String,
    /// Status of the check
    pub status: CheckStatus,
    /// Descriptive message about the check result
    pub message: String,
    /// Optional fix suggestion for warnings or errors
    pub fix: Option<String>,
}

impl Check {
    fn ok(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
            message: message.into(),
            fix: None,
        }
    }

    fn error(
        name: impl Into<String>,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Error,
            message: message.into(),
            fix: Some(fix.into()),
        }
    }

    fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning,
            message: message.into(),
            fix: None,
        }
    }
}

/// Main diagnostic tool for jira-mcp health checks
pub struct Doctor {
    checks: Vec<Check>,
}

impl Doctor {
    /// Create a new Doctor instance for running diagnostics
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Run all diagnostic checks and return the exit code
    pub async fn run_diagnostics(&mut self) -> Result<i32> {
        println!("{}", "jira-mcp doctor".bold().blue());
        println!("{}", "Running diagnostics...".dimmed());
        println!();

        self.check_environment();
        self.check_remote().await;

        self.print_results();
        Ok(self.exit_code())
    }

    /// Check each required environment variable, reporting every missing one
    fn check_environment(&mut self) {
        for var in [ENV_EMAIL, ENV_HOST, ENV_TOKEN] {
            match std::env::var(var) {
                Ok(value) if !value.trim().is_empty() => {
                    self.checks.push(Check::ok(var, "set"));
                }
                _ => {
                    self.checks.push(Check::error(
                        var,
                        "not set",
                        format!("export {var}=<value> or add it to a .env file"),
                    ));
                }
            }
        }

        match std::env::var(ENV_CONTEXT) {
            Ok(value) if !value.trim().is_empty() => {
                self.checks
                    .push(Check::ok(ENV_CONTEXT, format!("set to {value}")));
            }
            _ => {
                self.checks
                    .push(Check::ok(ENV_CONTEXT, "not set (optional, defaults to empty)"));
            }
        }
    }

    /// Verify connectivity and authentication against the remote tracker.
    ///
    /// Skipped when the configuration guard fails; the environment checks
    /// above already explain why.
    async fn check_remote(&mut self) {
        let config = match JiraConfig::from_env() {
            Ok(config) => config,
            Err(_) => {
                self.checks.push(Check::warning(
                    "Remote connectivity",
                    "skipped: configuration incomplete",
                ));
                return;
            }
        };

        let client = match JiraClient::new(&config) {
            Ok(client) => client,
            Err(e) => {
                self.checks.push(Check::error(
                    "Remote connectivity",
                    format!("cannot build client: {e}"),
                    format!("check that {ENV_HOST} is a valid URL"),
                ));
                return;
            }
        };

        match client.server_info().await {
            Ok(_) => {
                self.checks
                    .push(Check::ok("Remote connectivity", "server answered"));
            }
            Err(e) => {
                self.checks.push(Check::error(
                    "Remote connectivity",
                    format!("server unreachable: {e}"),
                    format!("check {ENV_HOST} and your network"),
                ));
                return;
            }
        }

        match client.myself().await {
            Ok(_) => {
                self.checks
                    .push(Check::ok("Authentication", "credentials accepted"));
            }
            Err(e) => {
                self.checks.push(Check::error(
                    "Authentication",
                    format!("credentials rejected: {e}"),
                    format!("check {ENV_EMAIL} and {ENV_TOKEN}"),
                ));
            }
        }
    }

    fn print_results(&self) {
        for check in &self.checks {
            let symbol = match check.status {
                CheckStatus::Ok => "✓".green(),
                CheckStatus::Warning => "⚠".yellow(),
                CheckStatus::Error => "✗".red(),
            };
            println!("{} {}: {}", symbol, check.name.bold(), check.message);
            if let Some(fix) = &check.fix {
                println!("  {} {}", "fix:".dimmed(), fix);
            }
        }
        println!();

        let errors = self.count(CheckStatus::Error);
        let warnings = self.count(CheckStatus::Warning);
        if errors > 0 {
            println!("{}", format!("{errors} error(s) found").red());
        } else if warnings > 0 {
            println!("{}", format!("{warnings} warning(s) found").yellow());
        } else {
            println!("{}", "All checks passed".green());
        }
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks
            .iter()
            .filter(|check| check.status == status)
            .count()
    }

    fn exit_code(&self) -> i32 {
        if self.count(CheckStatus::Error) > 0 {
            EXIT_ERROR
        } else if self.count(CheckStatus::Warning) > 0 {
            EXIT_WARNING
        } else {
            EXIT_SUCCESS
        }
    }
}

impl Default for Doctor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        for var in [ENV_EMAIL, ENV_HOST, ENV_TOKEN, ENV_CONTEXT] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_environment_check_reports_every_missing_variable() {
        clear_env();

        let mut doctor = Doctor::new();
        doctor.check_environment();

        let failing: Vec<_> = doctor
            .checks
            .iter()
            .filter(|check| check.status == CheckStatus::Error)
            .map(|check| check.name.clone())
            .collect();
        assert_eq!(failing, vec![ENV_EMAIL, ENV_HOST, ENV_TOKEN]);
        assert_eq!(doctor.exit_code(), EXIT_ERROR);
    }

    #[test]
    #[serial_test::serial]
    fn test_environment_check_passes_when_configured() {
        clear_env();
        std::env::set_var(ENV_EMAIL, "a@b.com");
        std::env::set_var(ENV_HOST, "https://x.example");
        std::env::set_var(ENV_TOKEN, "secret");

        let mut doctor = Doctor::new();
        doctor.check_environment();

        assert_eq!(doctor.count(CheckStatus::Error), 0);

        clear_env();
    }

    #[test]
    fn test_exit_code_prefers_errors_over_warnings() {
        let mut doctor = Doctor::new();
        doctor.checks.push(Check::warning("w", "warn"));
        assert_eq!(doctor.exit_code(), EXIT_WARNING);

        doctor.checks.push(Check::error("e", "bad", "fix it"));
        assert_eq!(doctor.exit_code(), EXIT_ERROR);
    }
}
