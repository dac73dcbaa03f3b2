use clap::Parser;

mod cli;
mod commands;
mod domain;
mod logging;
mod services;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init()?;
    tracing::debug!(json = cli.json, command = ?cli.resolved_command(), "starting");
    commands::handle_command(&cli)
}
