//! Page Bar
//!
//! Headless page-tab bar controller for multi-page form editors.
//!
//! This is the main entry point for the command-line driver.

use clap::Parser;
use pagebar_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting {} v{}", pagebar_cli::NAME, pagebar_cli::VERSION);

    let stdout = std::io::stdout();
    pagebar_cli::run(&cli, &mut stdout.lock())
}
