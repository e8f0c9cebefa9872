use clap::{Parser, Subcommand, builder::Styles};

/// Styles for clap output
const STYLES: Styles = Styles::styled()
    .header(clap::builder::styling::AnsiColor::Green.on_default().bold())
    .usage(clap::builder::styling::AnsiColor::Green.on_default().bold())
    .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(clap::builder::styling::AnsiColor::Yellow.on_default());

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "keysheet")]
#[command(author, version, about)]
#[command(styles = STYLES)]
#[command(
    long_about = "A TUI/CLI cheat sheet for editor keybindings with live search.\n\n\
    By default (without subcommands), launches an interactive TUI.\n\
    Use the list subcommand for non-interactive output.\n\n\
    The keybinding table comes from a JSON config file given via --config\n\
    or $KEYSHEET_CONFIG, falling back to the built-in vim cheat sheet."
)]
#[command(after_long_help = "Examples:\n  \
    keysheet                          # Launch interactive TUI\n  \
    keysheet --config keys.json       # Launch TUI with a custom table\n  \
    keysheet list                     # Print all keybindings (CLI)\n  \
    keysheet list yank --json         # Print matching keybindings as JSON")]
pub struct CliArgs {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<CliSubCommands>,

    /// Configuration file to load (JSON)
    #[arg(
        global = true,
        short,
        long,
        value_name = "FILE",
        help_heading = "Configuration"
    )]
    pub config: Option<String>,

    /// Theme to use for TUI
    #[arg(
        global = true,
        long,
        value_name = "THEME",
        help_heading = "Configuration"
    )]
    pub theme: Option<String>,

    /// Print current configuration and exit
    #[arg(global = true, long, help_heading = "Configuration")]
    pub print_config: bool,
}

/// Subcommands and their arguments
#[derive(Subcommand, Debug)]
pub enum CliSubCommands {
    /// List keybindings (non-interactive output)
    #[command(visible_alias = "ls")]
    List {
        /// Only show rows matching this query (case-insensitive)
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Output as JSON format
        #[arg(long)]
        json: bool,
    },
}
