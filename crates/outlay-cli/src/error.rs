//! CLI error types.

use std::path::PathBuf;

use outlay_core::OptimizerError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Negative budget.
    #[error("Invalid budget: {0}. Must be zero or positive.")]
    InvalidBudget(i64),

    /// Malformed `NAME:COST:RETURN` argument.
    #[error("Invalid option '{0}'. Use NAME:COST:RETURN, e.g. Acme:12:15.")]
    InvalidOptionArg(String),

    /// Malformed ledger line.
    #[error("Ledger {path}, line {line}: {reason}")]
    LedgerParse {
        /// Ledger file.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Bad interactive input.
    #[error("Invalid input: {0}")]
    Input(String),

    /// Option or budget rejected by the optimizer.
    #[error(transparent)]
    Optimizer(#[from] OptimizerError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
