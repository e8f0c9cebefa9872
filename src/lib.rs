pub mod cli;
pub mod config;
pub mod core;
pub mod tui;

use tracing_subscriber::EnvFilter;

/// Set up logging based on RUST_LOG environment variable
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
