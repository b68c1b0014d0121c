//! Up-front input validation.

use crate::error::{OptimizerError, OptimizerResult};
use crate::types::{InvestmentOption, OptimizerConfig};

/// Validates a budget and option list, returning the table capacity.
///
/// Checks run in a fixed order: budget sign, budget cap, each option in
/// index order, then the overflow bound. The first failure is returned.
pub(crate) fn validate(
    options: &[InvestmentOption],
    budget: i64,
    config: &OptimizerConfig,
) -> OptimizerResult<usize> {
    if budget < 0 {
        return Err(OptimizerError::invalid_budget(budget));
    }

    if let Some(limit) = config.max_budget {
        if budget > limit {
            return Err(OptimizerError::BudgetLimitExceeded { budget, limit });
        }
    }

    for (index, option) in options.iter().enumerate() {
        validate_option(index, option)?;
    }

    // Every positive-return option costs at least 1, so no table entry can
    // exceed budget * max_return.
    let max_return = options
        .iter()
        .map(|option| option.expected_return)
        .max()
        .unwrap_or(0);
    if budget.checked_mul(max_return).is_none() {
        return Err(OptimizerError::ReturnOverflow {
            budget,
            expected_return: max_return,
        });
    }

    usize::try_from(budget).map_err(|_| OptimizerError::BudgetLimitExceeded {
        budget,
        limit: i64::try_from(usize::MAX).unwrap_or(i64::MAX),
    })
}

/// Validates a single option at position `index`.
///
/// # Errors
///
/// Returns an error for a negative cost or return, or for a free option
/// with a positive return.
pub fn validate_option(index: usize, option: &InvestmentOption) -> OptimizerResult<()> {
    if option.cost < 0 {
        return Err(OptimizerError::invalid_option(
            index,
            &option.name,
            format!("negative cost {}", option.cost),
        ));
    }
    if option.expected_return < 0 {
        return Err(OptimizerError::invalid_option(
            index,
            &option.name,
            format!("negative return {}", option.expected_return),
        ));
    }
    if option.cost == 0 && option.expected_return > 0 {
        return Err(OptimizerError::degenerate_option(
            index,
            &option.name,
            option.expected_return,
        ));
    }
    Ok(())
}
