//! Forward pass: value and choice tables indexed by capacity.

use crate::error::{OptimizerError, OptimizerResult};
use crate::types::InvestmentOption;

/// Value and choice tables for capacities `0..=capacity`.
///
/// `values[w]` is the best return reachable at capacity `w`;
/// `choices[w]` is the option index last applied to reach it.
#[derive(Debug, Clone)]
pub(crate) struct DpTables {
    values: Vec<i64>,
    choices: Vec<Option<usize>>,
}

impl DpTables {
    /// Runs the forward pass over validated options.
    ///
    /// On equal candidates the lower option index is kept, since only a
    /// strict improvement overwrites an entry. Fails with
    /// [`OptimizerError::TableTooLarge`] if the tables cannot be allocated.
    pub(crate) fn build(options: &[InvestmentOption], capacity: usize) -> OptimizerResult<Self> {
        let costs: Vec<usize> = options.iter().map(unit_cost).collect();
        let mut values = filled_table(capacity, 0_i64)?;
        let mut choices = filled_table(capacity, None)?;

        for w in 0..=capacity {
            for (index, option) in options.iter().enumerate() {
                let cost = costs[index];
                if cost > w {
                    continue;
                }
                let candidate = values[w - cost] + option.expected_return;
                if candidate > values[w] {
                    values[w] = candidate;
                    choices[w] = Some(index);
                }
            }
        }

        Ok(Self { values, choices })
    }

    /// Largest capacity covered.
    pub(crate) fn capacity(&self) -> usize {
        self.values.len() - 1
    }

    /// Best return at `capacity`.
    pub(crate) fn value_at(&self, capacity: usize) -> i64 {
        self.values[capacity]
    }

    /// Option applied last at `capacity`, if any improved on zero.
    pub(crate) fn choice_at(&self, capacity: usize) -> Option<usize> {
        self.choices[capacity]
    }

    /// Consumes the tables, keeping only the value column.
    pub(crate) fn into_values(self) -> Vec<i64> {
        self.values
    }
}

/// Allocates a table covering `0..=capacity` without aborting on failure.
fn filled_table<T: Clone>(capacity: usize, fill: T) -> OptimizerResult<Vec<T>> {
    let too_large = || OptimizerError::table_too_large(capacity);
    let len = capacity.checked_add(1).ok_or_else(too_large)?;

    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| too_large())?;
    table.resize(len, fill);
    Ok(table)
}

/// Cost of one unit as a table offset.
///
/// Costs beyond `usize` can never fit a table, so they saturate.
pub(crate) fn unit_cost(option: &InvestmentOption) -> usize {
    usize::try_from(option.cost).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_option() {
        let options = vec![InvestmentOption::new("A", 2, 3)];
        let tables = DpTables::build(&options, 6).unwrap();

        assert_eq!(tables.capacity(), 6);
        assert_eq!(tables.into_values(), vec![0, 0, 3, 3, 6, 6, 9]);
    }

    #[test]
    fn test_choices() {
        let options = vec![
            InvestmentOption::new("A", 3, 4),
            InvestmentOption::new("B", 4, 5),
        ];
        let tables = DpTables::build(&options, 7).unwrap();

        assert_eq!(tables.choice_at(0), None);
        assert_eq!(tables.choice_at(2), None);
        assert_eq!(tables.choice_at(3), Some(0));
        assert_eq!(tables.choice_at(4), Some(1));
        assert_eq!(tables.choice_at(6), Some(0));
        // A and B both reach 9 at capacity 7; A is seen first.
        assert_eq!(tables.value_at(7), 9);
        assert_eq!(tables.choice_at(7), Some(0));
    }

    #[test]
    fn test_ties_keep_first_option() {
        let options = vec![
            InvestmentOption::new("X", 2, 3),
            InvestmentOption::new("Y", 2, 3),
        ];
        let tables = DpTables::build(&options, 4).unwrap();
        assert_eq!(tables.choice_at(2), Some(0));
        assert_eq!(tables.choice_at(4), Some(0));
    }

    #[test]
    fn test_zero_capacity() {
        let options = vec![InvestmentOption::new("A", 1, 10)];
        let tables = DpTables::build(&options, 0).unwrap();
        assert_eq!(tables.capacity(), 0);
        assert_eq!(tables.value_at(0), 0);
        assert_eq!(tables.choice_at(0), None);
    }

    #[test]
    fn test_free_zero_return_never_chosen() {
        let options = vec![
            InvestmentOption::new("noop", 0, 0),
            InvestmentOption::new("A", 2, 1),
        ];
        let tables = DpTables::build(&options, 4).unwrap();
        assert_eq!(tables.choice_at(4), Some(1));
        assert_eq!(tables.value_at(4), 2);
    }

    #[test]
    fn test_oversized_table_is_an_error() {
        let options = vec![InvestmentOption::new("A", 1, 1)];
        assert!(matches!(
            DpTables::build(&options, usize::MAX),
            Err(OptimizerError::TableTooLarge { .. })
        ));
        assert!(matches!(
            DpTables::build(&options, usize::MAX / 2),
            Err(OptimizerError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn test_unit_cost() {
        assert_eq!(unit_cost(&InvestmentOption::new("A", 7, 1)), 7);
    }
}
