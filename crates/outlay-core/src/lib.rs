//! # Outlay Core
//!
//! Investment allocation as an unbounded knapsack.
//!
//! Given investment options, each a named (cost, return) pair that may be
//! bought any number of times, and an integer budget, this crate computes
//! the maximum achievable return and one selection achieving it.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: No I/O, no caching, no state kept between calls
//! - **Validate first**: Bad input is rejected before any table is built
//! - **Deterministic ties**: Among equally good options the lowest index wins
//!
//! ## Quick Start
//!
//! ```rust
//! use outlay_core::prelude::*;
//!
//! let options = vec![
//!     InvestmentOption::new("A", 3, 4),
//!     InvestmentOption::new("B", 4, 5),
//! ];
//!
//! let allocation = optimize(&options, 7)?;
//! assert_eq!(allocation.max_return, 9);
//!
//! for selection in allocation.plan.selections(&options) {
//!     println!("{} - invest {} times", selection.option.name, selection.count);
//! }
//! # Ok::<(), OptimizerError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`optimizer`] - Forward pass, traceback and the [`Optimizer`] entry point
//! - [`frontier`] - Best return at every capacity from one run
//! - [`batch`] - Independent scenarios, optionally in parallel
//! - [`types`] - Options, plans and configuration
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel batch optimization

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod error;
pub mod frontier;
pub mod optimizer;
pub mod types;

// Re-export error types at crate root
pub use error::{OptimizerError, OptimizerResult};

// Re-export main types
pub use types::{InvestmentOption, OptimizerConfig, Plan, Selection};

pub use batch::{maybe_parallel_map, optimize_batch, Scenario};
pub use frontier::{return_frontier, Frontier, FrontierPoint};
pub use optimizer::{optimize, validate_option, Allocation, Optimizer};

/// Prelude module for convenient imports.
///
/// ```rust
/// use outlay_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{OptimizerError, OptimizerResult};
    pub use crate::types::{InvestmentOption, OptimizerConfig, Plan, Selection};

    pub use crate::batch::{optimize_batch, Scenario};
    pub use crate::frontier::{return_frontier, Frontier, FrontierPoint};
    pub use crate::optimizer::{optimize, Allocation, Optimizer};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        let err = OptimizerError::invalid_budget(-1);
        assert!(err.to_string().contains("non-negative"));
    }
}
