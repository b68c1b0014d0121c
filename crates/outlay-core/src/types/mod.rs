//! Domain types for allocation optimization.
//!
//! - [`InvestmentOption`]: A named (cost, return) pair
//! - [`Plan`]: Selection count per option index
//! - [`OptimizerConfig`]: Budget cap and batch parallelism

mod config;
mod option;
mod plan;

pub use config::OptimizerConfig;
pub use option::InvestmentOption;
pub use plan::{Plan, Selection};
