//! Feasibility oracle shared by every solver.

use fixedbitset::FixedBitSet;

use crate::{Allocation, Bid, price_of};

/// Whether no item is awarded to more than one selected bid.
///
/// Walks the selected bids in index order while keeping the union of the
/// items claimed so far, and stops at the first bid that overlaps it. The
/// cost is linear in the number of selected bids. Allocations with at most
/// one winner are trivially feasible.
///
/// # Examples
/// ```
/// use wdp_core::{Allocation, Bid, is_feasible};
///
/// let bids = [
///     Bid::from_items(2, [0, 1], 25),
///     Bid::from_items(2, [0], 10),
/// ];
/// assert!(is_feasible(&Allocation::decode(0b01, 2), &bids));
/// assert!(!is_feasible(&Allocation::decode(0b11, 2), &bids));
/// ```
#[must_use]
pub fn is_feasible(allocation: &Allocation, bids: &[Bid]) -> bool {
    let mut claimed = FixedBitSet::new();
    for bid in allocation.winners().filter_map(|index| bids.get(index)) {
        if !claimed.is_disjoint(bid.items()) {
            return false;
        }
        claimed.union_with(bid.items());
    }
    true
}

/// Price of a feasible allocation, zero for an infeasible one.
///
/// # Examples
/// ```
/// use wdp_core::{Allocation, Bid, fitness};
///
/// let bids = [Bid::from_items(1, [0], 10), Bid::from_items(1, [0], 20)];
/// assert_eq!(fitness(&Allocation::decode(0b10, 2), &bids), 20);
/// assert_eq!(fitness(&Allocation::decode(0b11, 2), &bids), 0);
/// ```
#[must_use]
pub fn fitness(allocation: &Allocation, bids: &[Bid]) -> u64 {
    if is_feasible(allocation, bids) {
        price_of(allocation, bids)
    } else {
        0
    }
}
