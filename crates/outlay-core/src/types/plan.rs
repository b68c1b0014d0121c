//! Investment plans: how many times each option is selected.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use super::InvestmentOption;

/// Selection counts keyed by option index.
///
/// Every stored count is positive. Iteration is in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    counts: BTreeMap<usize, u64>,
}

impl Plan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more selection of the option at `index`.
    pub fn increment(&mut self, index: usize) {
        *self.counts.entry(index).or_insert(0) += 1;
    }

    /// Number of times the option at `index` is selected (zero if absent).
    #[must_use]
    pub fn count(&self, index: usize) -> u64 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Returns true if no option is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct options selected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Total number of selections across all options.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates `(index, count)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(&index, &count)| (index, count))
    }

    /// Total cost of the plan against the options it was built from.
    ///
    /// Indices outside `options` are ignored.
    #[must_use]
    pub fn total_cost(&self, options: &[InvestmentOption]) -> i64 {
        self.sum_over(options, |option| option.cost)
    }

    /// Total return of the plan against the options it was built from.
    #[must_use]
    pub fn total_return(&self, options: &[InvestmentOption]) -> i64 {
        self.sum_over(options, |option| option.expected_return)
    }

    /// Resolves indices into display lines, in index order.
    #[must_use]
    pub fn selections<'a>(&self, options: &'a [InvestmentOption]) -> Vec<Selection<'a>> {
        self.iter()
            .filter_map(|(index, count)| {
                options.get(index).map(|option| Selection {
                    index,
                    option,
                    count,
                })
            })
            .collect()
    }

    fn sum_over(&self, options: &[InvestmentOption], field: impl Fn(&InvestmentOption) -> i64) -> i64 {
        self.iter()
            .filter_map(|(index, count)| options.get(index).map(|o| field(o) * count as i64))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = (&'a usize, &'a u64);
    type IntoIter = btree_map::Iter<'a, usize, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// One line of a resolved plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Option index.
    pub index: usize,
    /// The selected option.
    pub option: &'a InvestmentOption,
    /// Times selected.
    pub count: u64,
}

impl Selection<'_> {
    /// Cost of all units of this selection.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.option.cost * self.count as i64
    }

    /// Return of all units of this selection.
    #[must_use]
    pub fn expected_return(&self) -> i64 {
        self.option.expected_return * self.count as i64
    }
}
