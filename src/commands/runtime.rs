use crate::cli::{Cli, Commands};
use crate::services::device::device_details;
use crate::services::output::print_one;
use crate::services::report::default_report;

pub fn handle_command(cli: &Cli) -> anyhow::Result<()> {
    match cli.resolved_command() {
        Commands::Report => {
            let report = default_report();
            print_one(cli.json, report, |r| r.lines())?;
        }
        Commands::Device => {
            let details = device_details();
            tracing::debug!(fields = details.len(), "device descriptor emitted");
            print_one(cli.json, details, |d| {
                d.iter().map(|(k, v)| format!("{}: {}", k, v)).collect()
            })?;
        }
    }
    Ok(())
}
