//! Connection configuration for the Jira MCP server
//!
//! Credentials are read from the process environment, optionally seeded from
//! a development-time `.env` file in the working directory. Validation fails
//! fast and reports every missing variable so the operator can fix all
//! problems in one pass.

use std::path::Path;
use thiserror::Error;

/// Environment variable holding the account email
pub const ENV_EMAIL: &str = "JIRA_EMAIL";
/// Environment variable holding the base URL of the remote service
pub const ENV_HOST: &str = "JIRA_HOST";
/// Environment variable holding the API token
pub const ENV_TOKEN: &str = "JIRA_TOKEN";
/// Environment variable holding an optional URL path prefix
pub const ENV_CONTEXT: &str = "JIRA_CONTEXT";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are absent or empty
    #[error("Missing required environment variables: {}", .vars.join(", "))]
    MissingVars {
        /// Every missing variable name, in declaration order
        vars: Vec<String>,
    },
}

/// Validated connection settings for the remote issue tracker
///
/// Constructed once at process start and immutable thereafter. A
/// successfully constructed value always has non-empty `email`, `host`, and
/// `token`.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Account email used for basic authentication
    pub email: String,
    /// Base URL of the remote service, e.g. `https://tracker.example.com`
    pub host: String,
    /// API token used for basic authentication
    pub token: String,
    /// Optional path prefix under which the REST API is mounted
    pub context: String,
}

impl JiraConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is applied first (silently
    /// skipped when absent, never overriding variables that are already
    /// set). Fails with [`ConfigError::MissingVars`] naming every missing
    /// required variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_file(Path::new(".env"));
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// This is the same validation path as [`JiraConfig::from_env`] without
    /// touching process state, which keeps tests independent of the
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let email = lookup(ENV_EMAIL).unwrap_or_default();
        let host = lookup(ENV_HOST).unwrap_or_default();
        let token = lookup(ENV_TOKEN).unwrap_or_default();
        let context = lookup(ENV_CONTEXT).unwrap_or_default();

        let mut missing = Vec::new();
        if email.trim().is_empty() {
            missing.push(ENV_EMAIL.to_string());
        }
        if host.trim().is_empty() {
            missing.push(ENV_HOST.to_string());
        }
        if token.trim().is_empty() {
            missing.push(ENV_TOKEN.to_string());
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars { vars: missing });
        }

        Ok(Self {
            email,
            host,
            token,
            context,
        })
    }

    /// Whether all required connection values are present.
    ///
    /// Recomputed from the fields so callers can query it at any time
    /// without re-running construction-time validation.
    pub fn is_configured(&self) -> bool {
        !self.email.is_empty() && !self.host.is_empty() && !self.token.is_empty()
    }

    /// The REST base URL: host joined with the optional context prefix.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        let context = self.context.trim_matches('/');
        if context.is_empty() {
            host.to_string()
        } else {
            format!("{host}/{context}")
        }
    }
}

/// Apply a `KEY=VALUE` override file to the process environment.
///
/// Lines that are blank or start with `#` are skipped; keys already present
/// in the environment are left untouched. A missing or unreadable file is
/// not an error.
fn load_env_file(path: &Path) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return,
    };

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');
        if key.is_empty() || std::env::var_os(key).is_some() {
            continue;
        }
        std::env::set_var(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_all_required_present() {
        let config = JiraConfig::from_lookup(lookup_from(&[
            (ENV_EMAIL, "a@b.com"),
            (ENV_HOST, "https://x.example"),
            (ENV_TOKEN, "secret"),
        ]))
        .unwrap();

        assert!(config.is_configured());
        assert_eq!(config.email, "a@b.com");
        assert_eq!(config.host, "https://x.example");
        assert_eq!(config.token, "secret");
        assert_eq!(config.context, "");
    }

    #[test]
    fn test_missing_token_only_names_token() {
        let err = JiraConfig::from_lookup(lookup_from(&[
            (ENV_EMAIL, "a@b.com"),
            (ENV_HOST, "https://x.example"),
        ]))
        .unwrap_err();

        let ConfigError::MissingVars { vars } = err;
        assert_eq!(vars, vec![ENV_TOKEN.to_string()]);
    }

    #[test]
    fn test_all_missing_names_every_variable() {
        let err = JiraConfig::from_lookup(|_| None).unwrap_err();
        let ConfigError::MissingVars { vars } = err;
        assert_eq!(
            vars,
            vec![
                ENV_EMAIL.to_string(),
                ENV_HOST.to_string(),
                ENV_TOKEN.to_string()
            ]
        );
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let err = JiraConfig::from_lookup(lookup_from(&[
            (ENV_EMAIL, ""),
            (ENV_HOST, "https://x.example"),
            (ENV_TOKEN, "  "),
        ]))
        .unwrap_err();

        let ConfigError::MissingVars { vars } = err;
        assert_eq!(vars, vec![ENV_EMAIL.to_string(), ENV_TOKEN.to_string()]);
    }

    #[test]
    fn test_error_message_lists_all_missing() {
        let err = JiraConfig::from_lookup(|_| None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(ENV_EMAIL));
        assert!(msg.contains(ENV_HOST));
        assert!(msg.contains(ENV_TOKEN));
    }

    #[test]
    fn test_base_url_without_context() {
        let config = JiraConfig::from_lookup(lookup_from(&[
            (ENV_EMAIL, "a@b.com"),
            (ENV_HOST, "https://x.example/"),
            (ENV_TOKEN, "secret"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "https://x.example");
    }

    #[test]
    fn test_base_url_with_context() {
        let config = JiraConfig::from_lookup(lookup_from(&[
            (ENV_EMAIL, "a@b.com"),
            (ENV_HOST, "https://x.example"),
            (ENV_TOKEN, "secret"),
            (ENV_CONTEXT, "/jira/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "https://x.example/jira");
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_EMAIL, "a@b.com");
        std::env::set_var(ENV_HOST, "https://x.example");
        std::env::set_var(ENV_TOKEN, "secret");
        std::env::remove_var(ENV_CONTEXT);

        let config = JiraConfig::from_env().unwrap();
        assert!(config.is_configured());
        assert_eq!(config.email, "a@b.com");

        std::env::remove_var(ENV_EMAIL);
        std::env::remove_var(ENV_HOST);
        std::env::remove_var(ENV_TOKEN);
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_missing_is_fatal() {
        std::env::remove_var(ENV_EMAIL);
        std::env::remove_var(ENV_HOST);
        std::env::remove_var(ENV_TOKEN);

        let err = JiraConfig::from_env().unwrap_err();
        let ConfigError::MissingVars { vars } = err;
        assert_eq!(vars.len(), 3);
    }

    #[test]
    #[serial_test::serial]
    fn test_env_file_does_not_override_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# development overrides").unwrap();
        writeln!(file, "JIRA_ENV_FILE_TEST=from_file").unwrap();
        writeln!(file, "JIRA_ENV_FILE_KEPT=from_file").unwrap();
        drop(file);

        std::env::set_var("JIRA_ENV_FILE_KEPT", "from_env");
        std::env::remove_var("JIRA_ENV_FILE_TEST");

        load_env_file(&path);

        assert_eq!(std::env::var("JIRA_ENV_FILE_TEST").unwrap(), "from_file");
        assert_eq!(std::env::var("JIRA_ENV_FILE_KEPT").unwrap(), "from_env");

        std::env::remove_var("JIRA_ENV_FILE_TEST");
        std::env::remove_var("JIRA_ENV_FILE_KEPT");
    }

    #[test]
    fn test_env_file_missing_is_silently_skipped() {
        // Must not panic or set anything
        load_env_file(Path::new("/nonexistent/path/.env"));
    }
}
