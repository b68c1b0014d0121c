//! Property-based tests for optimizer invariants.
//!
//! These tests verify properties that should always hold:
//! - Plans are feasible and earn exactly the reported return
//! - The best return never drops as the budget grows
//! - Results are deterministic
//! - Ties go to the lowest index
//! - The optimum matches exhaustive search on small inputs

use outlay_core::prelude::*;
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

/// Options with positive cost and non-negative return.
fn option_strategy() -> impl Strategy<Value = InvestmentOption> {
    (1_i64..=15, 0_i64..=40).prop_map(|(cost, ret)| InvestmentOption::new("opt", cost, ret))
}

fn options_strategy(max_len: usize) -> impl Strategy<Value = Vec<InvestmentOption>> {
    prop::collection::vec(option_strategy(), 0..=max_len)
}

/// Exhaustive unbounded knapsack by recursion over option index.
fn brute_force(options: &[InvestmentOption], budget: i64) -> i64 {
    fn go(options: &[InvestmentOption], budget: i64) -> i64 {
        let Some((first, rest)) = options.split_first() else {
            return 0;
        };
        let mut best = go(rest, budget);
        let mut units = 1;
        while first.cost * units <= budget {
            let value = first.expected_return * units + go(rest, budget - first.cost * units);
            best = best.max(value);
            units += 1;
        }
        best
    }
    go(options, budget)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn plan_is_feasible_and_exact(options in options_strategy(6), budget in 0_i64..=120) {
        let allocation = optimize(&options, budget).unwrap();

        prop_assert!(allocation.max_return >= 0);
        prop_assert!(allocation.plan.total_cost(&options) <= budget);
        prop_assert_eq!(allocation.plan.total_return(&options), allocation.max_return);
        prop_assert_eq!(allocation.plan.total_cost(&options), allocation.total_cost);
    }

    #[test]
    fn max_return_non_decreasing_in_budget(options in options_strategy(5), budget in 0_i64..=80) {
        let smaller = optimize(&options, budget).unwrap().max_return;
        let larger = optimize(&options, budget + 1).unwrap().max_return;
        prop_assert!(larger >= smaller);
    }

    #[test]
    fn frontier_is_monotone_and_matches(options in options_strategy(5), budget in 0_i64..=60) {
        let frontier = return_frontier(&options, budget).unwrap();
        prop_assert_eq!(frontier.points().len() as i64, budget + 1);
        prop_assert_eq!(frontier.max_return_at(0), Some(0));

        for pair in frontier.points().windows(2) {
            prop_assert!(pair[1].max_return >= pair[0].max_return);
        }
        prop_assert_eq!(
            frontier.max_return_at(budget),
            Some(optimize(&options, budget).unwrap().max_return)
        );
    }

    #[test]
    fn optimize_is_deterministic(options in options_strategy(6), budget in 0_i64..=150) {
        let first = optimize(&options, budget).unwrap();
        let second = optimize(&options, budget).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn duplicate_option_never_selected(
        options in options_strategy(4),
        duplicate in option_strategy(),
        budget in 0_i64..=100,
    ) {
        // The copy sits after the original, so it can never strictly win.
        let mut options = options;
        options.push(duplicate.clone());
        options.push(duplicate);
        let copy_index = options.len() - 1;

        let allocation = optimize(&options, budget).unwrap();
        prop_assert_eq!(allocation.plan.count(copy_index), 0);
    }

    #[test]
    fn matches_exhaustive_search(options in options_strategy(4), budget in 0_i64..=30) {
        let allocation = optimize(&options, budget).unwrap();
        prop_assert_eq!(allocation.max_return, brute_force(&options, budget));
    }

    #[test]
    fn zero_budget_yields_nothing(options in options_strategy(6)) {
        let allocation = optimize(&options, 0).unwrap();
        prop_assert_eq!(allocation.max_return, 0);
        prop_assert!(allocation.plan.is_empty());
    }

    #[test]
    fn negative_budget_rejected(options in options_strategy(3), budget in i64::MIN..0) {
        prop_assert_eq!(
            optimize(&options, budget),
            Err(OptimizerError::InvalidBudget { budget })
        );
    }

    #[test]
    fn batch_matches_single_runs(options in options_strategy(4), budgets in prop::collection::vec(0_i64..=50, 0..10)) {
        let scenarios: Vec<Scenario> = budgets
            .iter()
            .map(|&budget| Scenario::new("s", options.clone(), budget))
            .collect();

        let results = optimize_batch(&scenarios, &OptimizerConfig::new().with_threshold(1));
        prop_assert_eq!(results.len(), scenarios.len());
        for (scenario, result) in scenarios.iter().zip(results) {
            prop_assert_eq!(result, optimize(&scenario.options, scenario.budget));
        }
    }
}
