//! Test-only helpers shared by unit, property and behaviour tests.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use crate::{Allocation, Bid, SearchSpace, is_feasible, price_of};

/// Width of the item sets built by [`bid`].
const TEST_ITEMS: usize = 8;

/// Construct a bid over the listed item indices.
///
/// # Examples
/// ```rust
/// use wdp_core::test_support::bid;
///
/// let bid = bid(&[0, 3], 40);
/// assert_eq!(bid.requested().collect::<Vec<_>>(), vec![0, 3]);
/// ```
#[must_use]
pub fn bid(items: &[usize], price: u64) -> Bid {
    Bid::from_items(TEST_ITEMS, items.iter().copied(), price)
}

/// Two items priced `[10, 20]`, one disjoint bid on each.
#[must_use]
pub fn disjoint_bids() -> Vec<Bid> {
    vec![bid(&[0], 10), bid(&[1], 20)]
}

/// Two items priced `[10, 20]`; the bids both want item 0.
#[must_use]
pub fn conflicting_bids() -> Vec<Bid> {
    vec![bid(&[0, 1], 25), bid(&[0], 10)]
}

/// One item priced `100`, wanted by three bids at 100, 90 and 80.
#[must_use]
pub fn exclusive_bids() -> Vec<Bid> {
    vec![bid(&[0], 100), bid(&[0], 90), bid(&[0], 80)]
}

/// Reference all-pairs feasibility check.
///
/// Quadratic in the number of selected bids; used to cross-check
/// [`is_feasible`].
#[must_use]
pub fn pairwise_feasible(allocation: &Allocation, bids: &[Bid]) -> bool {
    let selected: Vec<&Bid> = allocation
        .winners()
        .filter_map(|index| bids.get(index))
        .collect();
    selected.iter().enumerate().all(|(i, lhs)| {
        selected
            .iter()
            .skip(i.saturating_add(1))
            .all(|rhs| !lhs.conflicts_with(rhs))
    })
}

/// Best feasible price found by scanning every allocation.
///
/// Returns `None` when the bid count exceeds the supported search space.
#[must_use]
pub fn optimum_price(bids: &[Bid]) -> Option<u64> {
    let space = SearchSpace::for_bids(bids).ok()?;
    space
        .positions()
        .map(|position| space.decode(position))
        .filter(|allocation| is_feasible(allocation, bids))
        .map(|allocation| price_of(&allocation, bids))
        .max()
}
