use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sky` binary.
#[derive(Debug, Parser)]
#[command(name = "sky", version, about = "Skylark - flight booking console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, json, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "sky", "--format", "json", "--limit", "10", "--verbose", "flight", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Flight { .. }));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sky", "flight", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sky", "--format", "xml", "flight", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn booking_create_parses_positionals() {
        let cli = Cli::try_parse_from(["sky", "booking", "book", "3", "--seats", "2"])
            .expect("cli should parse");
        let Commands::Booking { action } = cli.command else {
            panic!("expected booking command");
        };
        let super::subcommands::BookingCommands::Book(args) = action else {
            panic!("expected book action");
        };
        assert_eq!(args.flight_id, 3);
        assert_eq!(args.seats, 2);
    }
}
