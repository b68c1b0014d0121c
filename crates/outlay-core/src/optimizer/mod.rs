//! Unbounded knapsack optimizer.
//!
//! Each option may be bought any number of times. The optimizer runs a
//! forward pass over capacities `0..=budget`, then a traceback from the
//! top capacity to recover one optimal [`Plan`].
//!
//! ## Recurrence
//!
//! ```text
//! value[0] = 0
//! value[w] = max(0, max_i { value[w - cost_i] + return_i : cost_i <= w })
//! ```
//!
//! Options are scanned in the order supplied and only a strict improvement
//! replaces the current best, so among equal candidates the lowest index
//! wins. The reconstructed plan follows the same rule.
//!
//! ## Complexity
//!
//! Time O(budget x options), space O(budget). Tables are private to each
//! call, so independent calls may run concurrently.

mod tables;
mod traceback;
mod validate;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OptimizerResult;
use crate::frontier::Frontier;
use crate::types::{InvestmentOption, OptimizerConfig, Plan};

use tables::{unit_cost, DpTables};
use traceback::trace_plan;
pub(crate) use validate::validate;
pub use validate::validate_option;

/// Result of an optimization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Budget the plan was computed for.
    pub budget: i64,

    /// Best achievable return within the budget.
    pub max_return: i64,

    /// Total cost of the reconstructed plan (never above `budget`).
    pub total_cost: i64,

    /// One optimal selection.
    pub plan: Plan,
}

impl Allocation {
    /// Splits the allocation into `(max_return, plan)`.
    #[must_use]
    pub fn into_parts(self) -> (i64, Plan) {
        (self.max_return, self.plan)
    }

    /// Budget left unspent by the plan.
    #[must_use]
    pub fn unspent(&self) -> i64 {
        self.budget - self.total_cost
    }

    /// Returns true if nothing could be bought.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }
}

/// Configured optimizer.
///
/// Holds no state between calls beyond its configuration.
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with the given configuration.
    #[must_use]
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Computes the best return within `budget` and one plan achieving it.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is negative or above the configured
    /// cap, if an option has a negative cost or return, if an option is free
    /// but has a positive return, or if the best return could overflow.
    pub fn optimize(
        &self,
        options: &[InvestmentOption],
        budget: i64,
    ) -> OptimizerResult<Allocation> {
        let capacity = validate(options, budget, &self.config)?;
        debug!(options = options.len(), budget, "optimizing allocation");

        if !any_selectable(options, capacity) {
            debug!(budget, "no option can improve on zero");
            return Ok(Allocation {
                budget,
                max_return: 0,
                total_cost: 0,
                plan: Plan::new(),
            });
        }

        let tables = DpTables::build(options, capacity)?;
        let plan = trace_plan(&tables, options);
        let max_return = tables.value_at(capacity);
        let total_cost = plan.total_cost(options);

        debug!(
            max_return,
            total_cost,
            selected = plan.len(),
            "allocation complete"
        );

        Ok(Allocation {
            budget,
            max_return,
            total_cost,
            plan,
        })
    }

    /// Computes the best return at every capacity from zero to `budget`.
    ///
    /// One point is materialized per capacity, so a budget too large to
    /// tabulate fails even when no option fits it.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Optimizer::optimize`], and with
    /// [`crate::OptimizerError::TableTooLarge`] if the points cannot be
    /// allocated.
    pub fn frontier(&self, options: &[InvestmentOption], budget: i64) -> OptimizerResult<Frontier> {
        let capacity = validate(options, budget, &self.config)?;
        debug!(options = options.len(), budget, "computing return frontier");

        let values = DpTables::build(options, capacity)?.into_values();
        Ok(Frontier::from_values(values))
    }
}

/// True if some option has a positive return and fits within `capacity`.
///
/// Otherwise every table entry stays zero and the plan is empty.
fn any_selectable(options: &[InvestmentOption], capacity: usize) -> bool {
    options
        .iter()
        .any(|option| option.expected_return > 0 && unit_cost(option) <= capacity)
}

/// Optimizes with the default configuration.
///
/// # Example
///
/// ```rust
/// use outlay_core::{optimize, InvestmentOption};
///
/// let options = vec![
///     InvestmentOption::new("A", 3, 4),
///     InvestmentOption::new("B", 4, 5),
/// ];
/// let allocation = optimize(&options, 7).unwrap();
///
/// assert_eq!(allocation.max_return, 9);
/// assert_eq!(allocation.plan.count(0), 1);
/// assert_eq!(allocation.plan.count(1), 1);
/// ```
///
/// # Errors
///
/// See [`Optimizer::optimize`].
pub fn optimize(options: &[InvestmentOption], budget: i64) -> OptimizerResult<Allocation> {
    Optimizer::new().optimize(options, budget)
}
