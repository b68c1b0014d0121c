//! Return frontier: best achievable return at every capacity.
//!
//! The forward pass already solves every capacity up to the budget, so a
//! single run answers "what would a smaller budget earn?" for all of them.

use serde::{Deserialize, Serialize};

use crate::error::OptimizerResult;
use crate::optimizer::Optimizer;
use crate::types::InvestmentOption;

/// Best return at one capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierPoint {
    /// Capacity.
    pub budget: i64,
    /// Best return within that capacity.
    pub max_return: i64,
}

/// Best return for each capacity `0..=budget`, non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontier {
    points: Vec<FrontierPoint>,
}

impl Frontier {
    pub(crate) fn from_values(values: Vec<i64>) -> Self {
        let points = values
            .into_iter()
            .zip(0_i64..)
            .map(|(max_return, budget)| FrontierPoint { budget, max_return })
            .collect();
        Self { points }
    }

    /// All points, one per capacity.
    #[must_use]
    pub fn points(&self) -> &[FrontierPoint] {
        &self.points
    }

    /// Largest capacity covered.
    #[must_use]
    pub fn budget(&self) -> i64 {
        self.points.last().map_or(0, |point| point.budget)
    }

    /// Best return at `budget`, or `None` outside the covered range.
    #[must_use]
    pub fn max_return_at(&self, budget: i64) -> Option<i64> {
        usize::try_from(budget)
            .ok()
            .and_then(|index| self.points.get(index))
            .map(|point| point.max_return)
    }

    /// Capacity zero plus every capacity where the best return rises.
    ///
    /// Each breakpoint is the smallest budget reaching its return.
    #[must_use]
    pub fn breakpoints(&self) -> Vec<FrontierPoint> {
        let mut breakpoints: Vec<FrontierPoint> = Vec::new();
        for point in &self.points {
            match breakpoints.last() {
                Some(last) if point.max_return <= last.max_return => {}
                _ => breakpoints.push(*point),
            }
        }
        breakpoints
    }
}

/// Computes the return frontier with the default configuration.
///
/// # Errors
///
/// Fails under the same conditions as [`crate::optimize`].
pub fn return_frontier(options: &[InvestmentOption], budget: i64) -> OptimizerResult<Frontier> {
    Optimizer::new().frontier(options, budget)
}
