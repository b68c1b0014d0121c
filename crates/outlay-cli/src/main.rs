//! Outlay CLI - Find the best mix of investments for a budget.
//!
//! # Usage
//!
//! ```bash
//! # Record investment options
//! outlay add "Blue Sky Corp" 3 4
//! outlay add Globex 4 5
//!
//! # Show the ledger
//! outlay list
//!
//! # Best plan for a budget
//! outlay optimize --budget 7
//!
//! # Several budgets at once, with inline options
//! outlay optimize --budget 10,25,40 --option Acme:12:15 --option Initech:5:7
//!
//! # Enter options interactively
//! outlay enter
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod ledger;
mod output;
mod settings;

use cli::{Cli, Commands};
use commands::Context;
use settings::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("outlay=debug,outlay_core=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("outlay=warn,outlay_core=warn"))
    };

    // stdout carries command output only
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    if !settings.use_colors {
        colored::control::set_override(false);
    }

    let ctx = Context {
        format: cli.format.unwrap_or(settings.default_format),
        quiet: cli.quiet,
        settings,
    };
    tracing::debug!(config = %ctx.settings.path.display(), format = ?ctx.format, "settings loaded");

    match cli.command {
        Commands::List(args) => commands::list::execute(args, &ctx)?,
        Commands::Optimize(args) => commands::optimize::execute(args, &ctx)?,
        Commands::Enter(args) => commands::enter::execute(args, &ctx)?,
        Commands::Add(args) => commands::add::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
