//! Error types for allocation optimization.
//!
//! Almost all errors are validation failures detected before any table is
//! built. The one exception is [`OptimizerError::TableTooLarge`], raised
//! when memory for the tables cannot be reserved.

use thiserror::Error;

/// Result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

/// Errors that can occur when optimizing an allocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizerError {
    /// Budget is negative.
    #[error("Invalid budget {budget}: must be non-negative")]
    InvalidBudget {
        /// The rejected budget.
        budget: i64,
    },

    /// Option has a negative cost or a negative return.
    #[error("Invalid option #{index} '{name}': {reason}")]
    InvalidOption {
        /// Position of the option in the supplied list.
        index: usize,
        /// The option name.
        name: String,
        /// The reason the option is invalid.
        reason: String,
    },

    /// Option is free but still yields a return.
    ///
    /// Such an option could be applied without limit at every capacity.
    #[error("Degenerate option #{index} '{name}': zero cost with return {expected_return}")]
    DegenerateOption {
        /// Position of the option in the supplied list.
        index: usize,
        /// The option name.
        name: String,
        /// The positive return of the free option.
        expected_return: i64,
    },

    /// Budget exceeds the configured cap.
    #[error("Budget {budget} exceeds the configured limit of {limit}")]
    BudgetLimitExceeded {
        /// The rejected budget.
        budget: i64,
        /// The configured maximum budget.
        limit: i64,
    },

    /// Best achievable return could overflow the value table.
    #[error("Return overflow: budget {budget} with return {expected_return} exceeds i64 range")]
    ReturnOverflow {
        /// The requested budget.
        budget: i64,
        /// The largest option return.
        expected_return: i64,
    },

    /// Tables for the budget cannot be allocated.
    #[error("Budget {capacity} is too large: tables for it cannot be allocated")]
    TableTooLarge {
        /// Largest capacity the tables would have covered.
        capacity: usize,
    },
}

impl OptimizerError {
    /// Create an invalid budget error.
    #[must_use]
    pub fn invalid_budget(budget: i64) -> Self {
        Self::InvalidBudget { budget }
    }

    /// Create an invalid option error.
    #[must_use]
    pub fn invalid_option(index: usize, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            index,
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a degenerate option error.
    #[must_use]
    pub fn degenerate_option(index: usize, name: impl Into<String>, expected_return: i64) -> Self {
        Self::DegenerateOption {
            index,
            name: name.into(),
            expected_return,
        }
    }

    /// Create a table allocation error.
    #[must_use]
    pub fn table_too_large(capacity: usize) -> Self {
        Self::TableTooLarge { capacity }
    }

    /// Returns the offending option index, if the error concerns one option.
    #[must_use]
    pub fn option_index(&self) -> Option<usize> {
        match self {
            Self::InvalidOption { index, .. } | Self::DegenerateOption { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OptimizerError::invalid_budget(-5);
        assert!(err.to_string().contains("-5"));

        let err = OptimizerError::invalid_option(2, "ACME", "negative cost -3");
        assert!(err.to_string().contains("#2"));
        assert!(err.to_string().contains("ACME"));
        assert!(err.to_string().contains("negative cost -3"));

        let err = OptimizerError::degenerate_option(0, "Free Lunch", 10);
        assert!(err.to_string().contains("Free Lunch"));
        assert!(err.to_string().contains("zero cost"));

        let err = OptimizerError::table_too_large(1 << 40);
        assert!(err.to_string().contains("too large"));
        assert_eq!(err.option_index(), None);
    }

    #[test]
    fn test_option_index() {
        assert_eq!(
            OptimizerError::degenerate_option(3, "X", 1).option_index(),
            Some(3)
        );
        assert_eq!(OptimizerError::invalid_budget(-1).option_index(), None);
    }

    #[test]
    fn test_error_clone() {
        let err = OptimizerError::BudgetLimitExceeded {
            budget: 100,
            limit: 10,
        };
        assert_eq!(err.clone(), err);
    }
}
