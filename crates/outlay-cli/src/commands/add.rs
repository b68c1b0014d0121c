//! Add command implementation.
//!
//! Appends one investment option to the ledger.

use anyhow::Result;
use clap::Args;

use outlay_core::{validate_option, InvestmentOption};

use crate::commands::{Context, LedgerArg};
use crate::ledger::append_record;
use crate::output::print_success;

/// Arguments for the add command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Company name (may contain spaces when quoted)
    pub name: String,

    /// Investment cost
    #[arg(allow_negative_numbers = true)]
    pub cost: i64,

    /// Expected return
    #[arg(allow_negative_numbers = true)]
    pub expected_return: i64,

    #[command(flatten)]
    pub ledger: LedgerArg,
}

/// Execute the add command.
pub fn execute(args: AddArgs, ctx: &Context) -> Result<()> {
    let path = ctx.ledger_path(args.ledger.ledger.as_deref());
    let option = InvestmentOption::new(args.name.trim(), args.cost, args.expected_return);

    validate_option(0, &option)?;
    append_record(path, &option)?;
    tracing::debug!(name = %option.name, path = %path.display(), "option appended");

    if !ctx.quiet {
        print_success(&format!(
            "Company {} has been added to {}.",
            option.name,
            path.display()
        ));
    }
    Ok(())
}
