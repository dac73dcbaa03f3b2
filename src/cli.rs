use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vi-meta", version, about = "Device and session metadata reporter")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the indexed path list and the session lookup (default)
    Report,
    /// Print the static device descriptor
    Device,
}

impl Cli {
    pub fn resolved_command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Report)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn no_subcommand_means_report() {
        let cli = Cli::try_parse_from(["vi-meta"]).expect("parse");
        assert!(matches!(cli.resolved_command(), Commands::Report));
        assert!(!cli.json);
    }

    #[test]
    fn json_flag_is_global() {
        let cli = Cli::try_parse_from(["vi-meta", "device", "--json"]).expect("parse");
        assert!(matches!(cli.resolved_command(), Commands::Device));
        assert!(cli.json);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["vi-meta", "upload"]).is_err());
    }
}
