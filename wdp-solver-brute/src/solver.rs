//! Exhaustive enumeration of the search space.

use std::time::Instant;

use wdp_core::{Bid, Diagnostics, SearchResult, SearchSpace, SolveError, Solver, is_feasible};

/// Solver that scores every allocation and keeps the best feasible one.
///
/// Optimal by construction. Ties keep the allocation with the numerically
/// smallest mask because the best is only replaced on a strictly higher
/// price.
///
/// # Examples
/// ```
/// use wdp_core::{Bid, Solver};
/// use wdp_solver_brute::BruteForceSolver;
///
/// # fn main() -> Result<(), wdp_core::SolveError> {
/// let bids = [Bid::from_items(2, [0], 10), Bid::from_items(2, [1], 20)];
/// let result = BruteForceSolver.solve(&bids)?;
/// assert_eq!(result.winners(), vec![0, 1]);
/// assert_eq!(result.price, 30);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl Solver for BruteForceSolver {
    fn name(&self) -> &'static str {
        "brute"
    }

    fn solve(&self, bids: &[Bid]) -> Result<SearchResult, SolveError> {
        brute_force(bids)
    }
}

/// Find the revenue-maximising feasible allocation by full enumeration.
///
/// Walks positions `0..2^m` in order, starting from the empty allocation at
/// price 0.
///
/// # Errors
///
/// Returns [`SolveError::SearchSpaceTooLarge`] before enumerating when the
/// bid count exceeds [`wdp_core::MAX_BIDS`].
pub fn brute_force(bids: &[Bid]) -> Result<SearchResult, SolveError> {
    let space = SearchSpace::for_bids(bids)?;
    let started_at = Instant::now();
    log::debug!(
        "enumerating {} allocations over {} bids",
        space.size(),
        space.bids()
    );

    let mut best_position = 0_u64;
    let mut best_price = 0_u64;
    for position in space.positions() {
        let allocation = space.decode(position);
        let price = allocation.price(bids);
        // Feasibility is only worth checking for a candidate improvement.
        if price > best_price && is_feasible(&allocation, bids) {
            log::debug!("new best allocation {position:#b} at price {price}");
            best_position = position;
            best_price = price;
        }
    }

    let result = SearchResult {
        allocation: space.decode(best_position),
        price: best_price,
        diagnostics: Diagnostics {
            elapsed: started_at.elapsed(),
            evaluations: space.size(),
        },
    };
    log::info!(
        "brute force finished: price {} over {} bids in {:?}",
        result.price,
        space.bids(),
        result.elapsed()
    );
    Ok(result)
}
