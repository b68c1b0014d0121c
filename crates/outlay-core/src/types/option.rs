//! Investment option representation.

use serde::{Deserialize, Serialize};

/// A named investment that may be bought any number of times.
///
/// Names need not be unique; an option is identified by its position in
/// the list handed to the optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvestmentOption {
    /// Display name (e.g., company name).
    pub name: String,

    /// Cost of one unit of this investment.
    pub cost: i64,

    /// Expected return (profit) of one unit.
    pub expected_return: i64,
}

impl InvestmentOption {
    /// Creates a new investment option.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: i64, expected_return: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            expected_return,
        }
    }

    /// Returns true if one unit fits within the given capacity.
    #[must_use]
    pub fn fits(&self, capacity: i64) -> bool {
        self.cost <= capacity
    }

    /// Return per unit of cost, or `None` for free options.
    #[must_use]
    pub fn return_ratio(&self) -> Option<f64> {
        if self.cost == 0 {
            None
        } else {
            Some(self.expected_return as f64 / self.cost as f64)
        }
    }
}
