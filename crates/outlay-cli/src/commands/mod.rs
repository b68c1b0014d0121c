//! CLI command implementations.

pub mod add;
pub mod config;
pub mod enter;
pub mod list;
pub mod optimize;

// Re-export submodules for convenience
pub use add::AddArgs;
pub use config::ConfigArgs;
pub use enter::EnterArgs;
pub use list::ListArgs;
pub use optimize::OptimizeArgs;

use std::path::{Path, PathBuf};

use outlay_core::{InvestmentOption, OptimizerConfig};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::settings::Settings;

/// Per-invocation state shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub settings: Settings,
}

impl Context {
    /// Ledger path from the flag, falling back to the configured one.
    pub fn ledger_path<'a>(&'a self, flag: Option<&'a Path>) -> &'a Path {
        flag.unwrap_or(self.settings.ledger_path.as_path())
    }

    /// Optimizer configuration derived from the settings.
    pub fn optimizer_config(&self) -> OptimizerConfig {
        OptimizerConfig::new().with_max_budget(self.settings.max_budget)
    }
}

/// Parses a `NAME:COST:RETURN` argument. The name may itself contain colons.
pub fn parse_option_arg(s: &str) -> CliResult<InvestmentOption> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(ret), Some(cost), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CliError::InvalidOptionArg(s.to_string()));
    };

    let name = name.trim();
    let cost = cost.trim().parse::<i64>();
    let ret = ret.trim().parse::<i64>();
    match (cost, ret) {
        (Ok(cost), Ok(ret)) if !name.is_empty() => Ok(InvestmentOption::new(name, cost, ret)),
        _ => Err(CliError::InvalidOptionArg(s.to_string())),
    }
}

/// Validates a budget entered on the command line.
pub fn validate_budget(budget: i64) -> CliResult<i64> {
    if budget < 0 {
        return Err(CliError::InvalidBudget(budget));
    }
    Ok(budget)
}

/// Optional `--ledger` flag shared by commands that read or write it.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LedgerArg {
    /// Ledger file (defaults to the configured ledger_path)
    #[arg(short, long, env = "OUTLAY_LEDGER")]
    pub ledger: Option<PathBuf>,
}
