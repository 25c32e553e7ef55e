use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jira-mcp")]
#[command(version)]
#[command(about = "An MCP server bridging agent clients to a Jira-compatible issue tracker")]
#[command(long_about = "
jira-mcp exposes a Jira-compatible issue tracker's REST API as MCP tools
for agent-style clients. Connection credentials come from the environment:
JIRA_EMAIL, JIRA_HOST, JIRA_TOKEN, and optionally JIRA_CONTEXT.

Example usage:
  jira-mcp serve      # Run as MCP server over stdio
  jira-mcp doctor     # Check configuration and connectivity
  jira-mcp completion bash > ~/.bashrc.d/jira-mcp  # Generate bash completions
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs jira-mcp as an MCP server over stdio. The server will:

- Validate JIRA_EMAIL, JIRA_HOST, and JIRA_TOKEN (all required; every
  missing variable is named in the startup error)
- Build one authenticated client to the remote tracker
- Register the tool catalog and answer tool invocations until shutdown

Example:
  jira-mcp serve
  # Or configure in your agent client's MCP settings
")]
    Serve,
    /// Diagnose configuration and connectivity issues
    #[command(long_about = "
Checks each required environment variable (reporting every missing one),
then verifies connectivity and authentication against the remote tracker.

Exit codes:
  0 - All checks passed
  1 - Warnings found
  2 - Errors found

Example:
  jira-mcp doctor
")]
    Doctor,
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_serve() {
        let cli = Cli::try_parse_from(["jira-mcp", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_cli_parses_doctor_with_flags() {
        let cli = Cli::try_parse_from(["jira-mcp", "--verbose", "doctor"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Doctor)));
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["jira-mcp", "frobnicate"]).is_err());
    }
}
