//! Optimize command implementation.
//!
//! Finds the investment plan with the highest expected return for one or
//! more budgets, using ledger options or options given inline.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use outlay_core::{
    optimize_batch, Allocation, FrontierPoint, InvestmentOption, Optimizer, Scenario,
};

use crate::cli::OutputFormat;
use crate::commands::{parse_option_arg, validate_budget, Context, LedgerArg};
use crate::ledger::read_ledger;
use crate::output::{print_document, print_header, print_info, print_output, print_warning, KeyValue};

/// Message shown when nothing fits the budget.
pub const NOTHING_FITS: &str = "No investments can be made within the budget.";

/// Arguments for the optimize command.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Total investment budget (repeat or comma-separate for several)
    #[arg(
        short,
        long,
        required = true,
        num_args = 1..,
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub budget: Vec<i64>,

    #[command(flatten)]
    pub ledger: LedgerArg,

    /// Inline option as NAME:COST:RETURN (repeatable); replaces the ledger
    #[arg(short = 'o', long = "option", value_name = "NAME:COST:RETURN")]
    pub options: Vec<String>,

    /// Also show the budgets at which the best return rises
    #[arg(long)]
    pub frontier: bool,
}

/// One selected option in a plan.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PlanRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Company")]
    pub name: String,
    #[tabled(rename = "Cost ($)")]
    pub cost: i64,
    #[tabled(rename = "Return ($)")]
    pub expected_return: i64,
    #[tabled(rename = "Times Invested")]
    pub times: u64,
    #[tabled(rename = "Total Cost ($)")]
    pub total_cost: i64,
    #[tabled(rename = "Total Return ($)")]
    pub total_return: i64,
}

/// Summary of one budget in a multi-budget run.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct BudgetRow {
    #[tabled(rename = "Budget ($)")]
    pub budget: i64,
    #[tabled(rename = "Max Return ($)")]
    pub max_return: i64,
    #[tabled(rename = "Spent ($)")]
    pub total_cost: i64,
    #[tabled(rename = "Unspent ($)")]
    pub unspent: i64,
    #[tabled(rename = "Units")]
    pub units: u64,
}

impl From<&Allocation> for BudgetRow {
    fn from(allocation: &Allocation) -> Self {
        Self {
            budget: allocation.budget,
            max_return: allocation.max_return,
            total_cost: allocation.total_cost,
            unspent: allocation.unspent(),
            units: allocation.plan.total_units(),
        }
    }
}

/// One frontier breakpoint.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct FrontierRow {
    #[tabled(rename = "Budget ($)")]
    pub budget: i64,
    #[tabled(rename = "Max Return ($)")]
    pub max_return: i64,
}

impl From<&FrontierPoint> for FrontierRow {
    fn from(point: &FrontierPoint) -> Self {
        Self {
            budget: point.budget,
            max_return: point.max_return,
        }
    }
}

/// JSON document for a single budget.
#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    budget: i64,
    max_return: i64,
    total_cost: i64,
    unspent: i64,
    plan: &'a [PlanRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    frontier: Option<&'a [FrontierPoint]>,
}

/// JSON document for several budgets.
#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    allocations: &'a [BudgetRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    frontier: Option<&'a [FrontierPoint]>,
}

/// Execute the optimize command.
pub fn execute(args: OptimizeArgs, ctx: &Context) -> Result<()> {
    let options = if args.options.is_empty() {
        read_ledger(ctx.ledger_path(args.ledger.ledger.as_deref()))?
    } else {
        args.options
            .iter()
            .map(String::as_str)
            .map(parse_option_arg)
            .collect::<Result<Vec<_>, _>>()?
    };

    if options.is_empty() {
        print_warning("No investment data found.");
        return Ok(());
    }

    let budgets = args
        .budget
        .iter()
        .map(|&budget| validate_budget(budget))
        .collect::<Result<Vec<_>, _>>()?;

    let config = ctx.optimizer_config();
    let optimizer = Optimizer::with_config(config.clone());

    let frontier = if args.frontier {
        let top = budgets.iter().copied().max().unwrap_or(0);
        Some(optimizer.frontier(&options, top)?.breakpoints())
    } else {
        None
    };

    if let [budget] = budgets.as_slice() {
        let allocation = optimizer.optimize(&options, *budget)?;
        render_allocation(&options, &allocation, frontier.as_deref(), ctx)
    } else {
        let scenarios: Vec<Scenario> = budgets
            .iter()
            .map(|&budget| Scenario::new(format!("budget {budget}"), options.clone(), budget))
            .collect();
        let allocations = optimize_batch(&scenarios, &config)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        render_batch(&allocations, frontier.as_deref(), ctx)
    }
}

/// Builds display rows for a plan, in option index order.
pub fn plan_rows(options: &[InvestmentOption], allocation: &Allocation) -> Vec<PlanRow> {
    allocation
        .plan
        .selections(options)
        .into_iter()
        .map(|selection| PlanRow {
            index: selection.index,
            name: selection.option.name.clone(),
            cost: selection.option.cost,
            expected_return: selection.option.expected_return,
            times: selection.count,
            total_cost: selection.cost(),
            total_return: selection.expected_return(),
        })
        .collect()
}

/// Prints one allocation in the requested format.
pub fn render_allocation(
    options: &[InvestmentOption],
    allocation: &Allocation,
    frontier: Option<&[FrontierPoint]>,
    ctx: &Context,
) -> Result<()> {
    let rows = plan_rows(options, allocation);

    match ctx.format {
        OutputFormat::Table => {
            let summary = vec![
                KeyValue::from_money("Budget", allocation.budget),
                KeyValue::from_money("Maximum Expected Return", allocation.max_return),
                KeyValue::from_money("Total Cost", allocation.total_cost),
                KeyValue::from_money("Unspent", allocation.unspent()),
            ];
            if !ctx.quiet {
                print_header("Investment Summary");
            }
            print_output(&summary, ctx.format)?;

            if rows.is_empty() {
                print_info(NOTHING_FITS);
            } else {
                if !ctx.quiet {
                    print_header("Investment Plan (Company : Times Invested)");
                }
                print_output(&rows, ctx.format)?;
            }
            render_frontier_table(frontier, ctx)?;
        }
        OutputFormat::Json => {
            let report = PlanReport {
                budget: allocation.budget,
                max_return: allocation.max_return,
                total_cost: allocation.total_cost,
                unspent: allocation.unspent(),
                plan: &rows,
                frontier,
            };
            print_document(&report)?;
        }
        OutputFormat::Csv => {
            print_output(&rows, ctx.format)?;
            render_frontier_csv(frontier)?;
        }
        OutputFormat::Minimal => {
            println!("{}", allocation.max_return);
        }
    }

    Ok(())
}

/// Prints a multi-budget summary in the requested format.
fn render_batch(
    allocations: &[Allocation],
    frontier: Option<&[FrontierPoint]>,
    ctx: &Context,
) -> Result<()> {
    let rows: Vec<BudgetRow> = allocations.iter().map(BudgetRow::from).collect();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Best Return by Budget");
            }
            print_output(&rows, ctx.format)?;
            render_frontier_table(frontier, ctx)?;
        }
        OutputFormat::Json => {
            let report = BatchReport {
                allocations: &rows,
                frontier,
            };
            print_document(&report)?;
        }
        OutputFormat::Csv => {
            print_output(&rows, ctx.format)?;
            render_frontier_csv(frontier)?;
        }
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.max_return);
            }
        }
    }

    Ok(())
}

fn render_frontier_table(frontier: Option<&[FrontierPoint]>, ctx: &Context) -> Result<()> {
    if let Some(points) = frontier {
        let rows: Vec<FrontierRow> = points.iter().map(FrontierRow::from).collect();
        if !ctx.quiet {
            print_header("Return Frontier");
        }
        print_output(&rows, OutputFormat::Table)?;
    }
    Ok(())
}

fn render_frontier_csv(frontier: Option<&[FrontierPoint]>) -> Result<()> {
    if let Some(points) = frontier {
        let rows: Vec<FrontierRow> = points.iter().map(FrontierRow::from).collect();
        println!();
        print_output(&rows, OutputFormat::Csv)?;
    }
    Ok(())
}
