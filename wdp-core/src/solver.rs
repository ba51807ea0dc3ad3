use std::time::Duration;

use thiserror::Error;

use crate::{Allocation, Bid};

/// Search statistics attached to a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
    /// Number of allocations priced and checked for feasibility.
    pub evaluations: u64,
}

/// The best allocation a solver found, with its price.
///
/// # Examples
/// ```rust
/// use wdp_core::{Allocation, Diagnostics, SearchResult};
///
/// let result = SearchResult {
///     allocation: Allocation::decode(0b10, 2),
///     price: 20,
///     diagnostics: Diagnostics::default(),
/// };
/// assert_eq!(result.winners(), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The winning allocation.
    pub allocation: Allocation,
    /// Total price of the winning bids.
    pub price: u64,
    /// Timing and effort statistics.
    pub diagnostics: Diagnostics,
}

impl SearchResult {
    /// The empty allocation over `bids` bids: always feasible, price 0.
    #[must_use]
    pub fn empty(bids: usize) -> Self {
        Self {
            allocation: Allocation::empty(bids),
            price: 0,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Indices of the winning bids in ascending order.
    #[must_use]
    pub fn winners(&self) -> Vec<usize> {
        self.allocation.winners().collect()
    }

    /// Wall-clock time spent searching.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.diagnostics.elapsed
    }
}

/// Errors returned by [`Solver::solve`].
///
/// Both variants are configuration errors surfaced before any search work
/// starts; a solver that has started searching always produces a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The bid count has more allocations than a 64-bit position can index.
    #[error("{bids} bids exceed the supported maximum of {max}")]
    SearchSpaceTooLarge {
        /// Number of bids supplied.
        bids: usize,
        /// Largest supported bid count.
        max: usize,
    },
    /// Solver hyperparameters were invalid, e.g. an empty population.
    #[error("invalid solver configuration: {reason}")]
    InvalidConfig {
        /// Which parameter was rejected.
        reason: &'static str,
    },
}

/// Select the revenue-maximising feasible subset of a fixed bid collection.
///
/// Implementations borrow the bids read-only and must be re-entrant.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Short identifier used in reports, e.g. `"brute"`.
    fn name(&self) -> &'static str;

    /// Solve one auction instance.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] when the input or configuration cannot be
    /// searched.
    fn solve(&self, bids: &[Bid]) -> Result<SearchResult, SolveError>;
}
