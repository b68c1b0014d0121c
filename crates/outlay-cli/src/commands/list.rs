//! List command implementation.
//!
//! Shows the investment options stored in the ledger.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use outlay_core::InvestmentOption;

use crate::cli::OutputFormat;
use crate::commands::{Context, LedgerArg};
use crate::ledger::read_ledger;
use crate::output::{print_header, print_output, print_warning};

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub ledger: LedgerArg,
}

/// One ledger option for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct OptionRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Company")]
    pub name: String,
    #[tabled(rename = "Cost ($)")]
    pub cost: i64,
    #[tabled(rename = "Expected Return ($)")]
    pub expected_return: i64,
}

impl OptionRow {
    fn new(index: usize, option: &InvestmentOption) -> Self {
        Self {
            index,
            name: option.name.clone(),
            cost: option.cost,
            expected_return: option.expected_return,
        }
    }
}

/// Execute the list command.
pub fn execute(args: ListArgs, ctx: &Context) -> Result<()> {
    let path = ctx.ledger_path(args.ledger.ledger.as_deref());
    let options = read_ledger(path)?;

    if options.is_empty() {
        print_warning(&format!("No investment data found in {}.", path.display()));
        return Ok(());
    }

    let rows: Vec<OptionRow> = options
        .iter()
        .enumerate()
        .map(|(index, option)| OptionRow::new(index, option))
        .collect();

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header("Available Companies to Invest In");
    }
    print_output(&rows, ctx.format)?;
    Ok(())
}
