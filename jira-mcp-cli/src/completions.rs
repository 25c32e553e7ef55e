//! Shell completion generation

use crate::cli::Cli;
use clap::CommandFactory;

/// Print completions for the given shell to stdout
pub fn print_completion(shell: clap_complete::Shell) -> std::io::Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
