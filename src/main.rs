use anyhow::{Context, Result};
use clap::Parser;
use keysheet::cli::{self, CliArgs};
use keysheet::config::AppConfig;
use keysheet::{setup_logging, tui};

fn main() -> Result<()> {
    setup_logging();

    let cli_args = CliArgs::parse();
    let app_config = AppConfig::from_layers(&cli_args).context("Failed to load configuration")?;

    if cli_args.print_config {
        app_config.print();
        return Ok(());
    }

    match &cli_args.command {
        Some(_) => {
            cli::execute_cli_command(&cli_args, app_config)
                .context("Failed to execute CLI command")?;
        }
        None => {
            tui::run_tui_app(app_config).context("Failed to run TUI application")?;
        }
    }

    Ok(())
}
