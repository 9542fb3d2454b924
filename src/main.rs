//! Monty Hall simulator CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use monty_hall::{app, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let status = app::run(&cli, &mut stdout.lock(), color)?;

    Ok(ExitCode::from(status))
}
