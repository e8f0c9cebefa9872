use anyhow::{Context, Result};

use crate::cli::commands;
use crate::cli::{CliArgs, CliSubCommands};
use crate::config::AppConfig;

/// Execute CLI command based on the subcommand
pub fn execute_cli_command(args: &CliArgs, config: AppConfig) -> Result<()> {
    let command = args.command.as_ref().context("No CLI command provided")?;

    match command {
        CliSubCommands::List { query, json } => {
            commands::list_keybinds(config, query.as_deref(), *json)
                .context("Failed to execute list command")?;
        }
    }
    Ok(())
}
