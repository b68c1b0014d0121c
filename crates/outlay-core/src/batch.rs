//! Batch optimization of independent scenarios.
//!
//! Each scenario gets its own tables, so scenarios can run on the rayon
//! pool when the `parallel` feature is enabled and the batch is large
//! enough (see [`OptimizerConfig::should_parallelize`]).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OptimizerResult;
use crate::optimizer::{Allocation, Optimizer};
use crate::types::{InvestmentOption, OptimizerConfig};

/// One optimization request in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Caller-chosen label, echoed back for reporting.
    pub label: String,
    /// Options available in this scenario.
    pub options: Vec<InvestmentOption>,
    /// Budget for this scenario.
    pub budget: i64,
}

impl Scenario {
    /// Creates a new scenario.
    #[must_use]
    pub fn new(label: impl Into<String>, options: Vec<InvestmentOption>, budget: i64) -> Self {
        Self {
            label: label.into(),
            options,
            budget,
        }
    }
}

/// Optimizes every scenario, returning results in input order.
///
/// A failing scenario does not affect the others.
pub fn optimize_batch(
    scenarios: &[Scenario],
    config: &OptimizerConfig,
) -> Vec<OptimizerResult<Allocation>> {
    debug!(
        scenarios = scenarios.len(),
        parallel = config.should_parallelize(scenarios.len()),
        "optimizing batch"
    );

    let optimizer = Optimizer::with_config(config.clone());
    maybe_parallel_map(scenarios, config, |scenario| {
        optimizer.optimize(&scenario.options, scenario.budget)
    })
}

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &OptimizerConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptimizerError;
    use crate::optimize;

    fn options() -> Vec<InvestmentOption> {
        vec![
            InvestmentOption::new("A", 3, 4),
            InvestmentOption::new("B", 4, 5),
        ]
    }

    #[test]
    fn test_results_in_input_order() {
        let scenarios: Vec<Scenario> = (0..20)
            .map(|budget| Scenario::new(format!("b{budget}"), options(), budget))
            .collect();

        let results = optimize_batch(&scenarios, &OptimizerConfig::new().with_threshold(2));
        assert_eq!(results.len(), scenarios.len());

        for (scenario, result) in scenarios.iter().zip(&results) {
            let expected = optimize(&scenario.options, scenario.budget).unwrap();
            assert_eq!(result.as_ref().unwrap(), &expected);
        }
    }

    #[test]
    fn test_failures_are_isolated() {
        let scenarios = vec![
            Scenario::new("ok", options(), 7),
            Scenario::new("negative", options(), -1),
            Scenario::new("ok again", options(), 3),
        ];

        let results = optimize_batch(&scenarios, &OptimizerConfig::sequential());
        assert_eq!(results[0].as_ref().unwrap().max_return, 9);
        assert!(matches!(
            results[1],
            Err(OptimizerError::InvalidBudget { budget: -1 })
        ));
        assert_eq!(results[2].as_ref().unwrap().max_return, 4);
    }

    #[test]
    fn test_config_cap_applies_to_batch() {
        let scenarios = vec![Scenario::new("big", options(), 50)];
        let results = optimize_batch(&scenarios, &OptimizerConfig::new().with_max_budget(10));
        assert!(matches!(
            results[0],
            Err(OptimizerError::BudgetLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_maybe_parallel_map() {
        let config = OptimizerConfig::sequential();
        let items = vec![1, 2, 3];
        assert_eq!(maybe_parallel_map(&items, &config, |x| x * 2), vec![2, 4, 6]);
    }

    #[test]
    fn test_empty_batch() {
        assert!(optimize_batch(&[], &OptimizerConfig::default()).is_empty());
    }
}
