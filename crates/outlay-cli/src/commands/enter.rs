//! Enter command implementation.
//!
//! Prompts for investment options one by one, then for a budget, and
//! prints the best plan. Prompts go to stderr so that stdout carries only
//! the result.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;

use outlay_core::{validate_option, InvestmentOption, Optimizer};

use crate::commands::optimize::render_allocation;
use crate::commands::{validate_budget, Context};
use crate::error::{CliError, CliResult};

/// Arguments for the enter command.
#[derive(Args, Debug)]
pub struct EnterArgs {
    /// Budget to use instead of prompting for one
    #[arg(short, long, allow_negative_numbers = true)]
    pub budget: Option<i64>,
}

/// Execute the enter command.
pub fn execute(args: EnterArgs, ctx: &Context) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompts = std::io::stderr();

    let options = read_options(&mut input, &mut prompts)?;
    let budget = match args.budget {
        Some(budget) => budget,
        None => prompt_number(
            &mut input,
            &mut prompts,
            "Enter your total investment budget: ",
        )?,
    };
    let budget = validate_budget(budget)?;

    let allocation = Optimizer::with_config(ctx.optimizer_config()).optimize(&options, budget)?;
    render_allocation(&options, &allocation, None, ctx)
}

/// Reads a count followed by that many name/cost/return entries.
///
/// Each option is validated as soon as it is entered.
pub fn read_options<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
) -> CliResult<Vec<InvestmentOption>> {
    let count = prompt_number(
        input,
        prompts,
        "Enter the number of companies you want to add: ",
    )?;
    let count = usize::try_from(count)
        .map_err(|_| CliError::Input(format!("company count {count} must not be negative")))?;

    // The count is untrusted, so it only bounds the loop.
    let mut options = Vec::new();
    for index in 0..count {
        writeln!(prompts, "\nEnter details for company {}:", index + 1)?;
        let name = prompt_line(input, prompts, "Company Name: ")?;
        if name.is_empty() {
            return Err(CliError::Input("company name must not be empty".into()));
        }
        let cost = prompt_number(input, prompts, "Investment Cost: ")?;
        let expected_return = prompt_number(input, prompts, "Expected Return: ")?;

        let option = InvestmentOption::new(name, cost, expected_return);
        validate_option(index, &option)?;
        options.push(option);
    }
    Ok(options)
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, prompts: &mut W, prompt: &str) -> CliResult<String> {
    write!(prompts, "{prompt}")?;
    prompts.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::Input("unexpected end of input".into()));
    }
    Ok(line.trim().to_string())
}

fn prompt_number<R: BufRead, W: Write>(input: &mut R, prompts: &mut W, prompt: &str) -> CliResult<i64> {
    let line = prompt_line(input, prompts, prompt)?;
    line.parse::<i64>()
        .map_err(|_| CliError::Input(format!("'{line}' is not a whole number")))
}
