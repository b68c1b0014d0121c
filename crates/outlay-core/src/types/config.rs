//! Configuration for optimizer runs.

use serde::{Deserialize, Serialize};

/// Configuration for optimizer runs.
///
/// Controls the budget cap and batch parallelism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Largest budget accepted. `None` means no cap.
    ///
    /// Table memory grows linearly with the budget, so callers facing
    /// untrusted input should set this.
    pub max_budget: Option<i64>,

    /// Enable parallel batch processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum scenario count to trigger parallel processing.
    pub parallel_threshold: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_budget: None,
            parallel: true,
            parallel_threshold: 8,
        }
    }
}

impl OptimizerConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the budget cap.
    #[must_use]
    pub fn with_max_budget(mut self, limit: i64) -> Self {
        self.max_budget = Some(limit);
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
