//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AddArgs, ConfigArgs, EnterArgs, ListArgs, OptimizeArgs};

/// Outlay - Find the best mix of investments for a budget
#[derive(Parser)]
#[command(name = "outlay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the per-user one
    #[arg(long, env = "OUTLAY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the investment options stored in the ledger
    List(ListArgs),

    /// Compute the best investment plan for one or more budgets
    Optimize(OptimizeArgs),

    /// Enter investment options interactively, then optimize
    Enter(EnterArgs),

    /// Append an investment option to the ledger
    Add(AddArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

impl OutputFormat {
    /// Parses a stored format name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("minimal"), Some(OutputFormat::Minimal));
        assert_eq!(OutputFormat::parse("xml"), None);
    }

    #[test]
    fn test_parse_optimize() {
        let cli = Cli::try_parse_from([
            "outlay", "optimize", "--budget", "7", "--option", "A:3:4", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Optimize(_)));
    }
}
