//! Candidate allocations and their prices.
//!
//! An allocation is a bit vector over the bids of one auction. The integer
//! encoding maps bit `j` of a `u64` to bid `j`, which lets solvers treat the
//! whole search space as the range `0..2^m`.

use std::fmt;

use fixedbitset::FixedBitSet;

use crate::Bid;

/// Width of the integer encoding.
const MASK_BITS: usize = 64;

/// A subset of bids marked as tentative winners.
///
/// # Examples
/// ```
/// use wdp_core::Allocation;
///
/// let allocation = Allocation::decode(0b101, 3);
/// assert_eq!(allocation.winners().collect::<Vec<_>>(), vec![0, 2]);
/// assert_eq!(allocation.encode(), Some(0b101));
/// assert_eq!(allocation.to_string(), "101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Allocation {
    selected: FixedBitSet,
}

impl Allocation {
    /// The allocation over `bids` bids that selects nobody.
    #[must_use]
    pub fn empty(bids: usize) -> Self {
        Self {
            selected: FixedBitSet::with_capacity(bids),
        }
    }

    /// Decode the integer `mask` into an allocation over `bids` bids.
    ///
    /// Bits at or above `bids` are dropped, so the decoding is exact for
    /// every mask in `0..2^bids`.
    #[must_use]
    pub fn decode(mask: u64, bids: usize) -> Self {
        let mut selected = FixedBitSet::with_capacity(bids);
        for bit in 0..bids.min(MASK_BITS) {
            if (mask >> bit) & 1 == 1 {
                selected.insert(bit);
            }
        }
        Self { selected }
    }

    /// Build an allocation over `bids` bids selecting the listed winners.
    ///
    /// Indices outside `0..bids` are ignored.
    #[must_use]
    pub fn from_winners<I>(bids: usize, winners: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut selected = FixedBitSet::with_capacity(bids);
        for winner in winners.into_iter().filter(|winner| *winner < bids) {
            selected.insert(winner);
        }
        Self { selected }
    }

    /// Encode the allocation as an integer mask.
    ///
    /// Returns `None` when a selected bid lies beyond the 64-bit width.
    #[must_use]
    pub fn encode(&self) -> Option<u64> {
        self.selected.ones().try_fold(0_u64, |mask, bit| {
            (bit < MASK_BITS).then(|| mask | (1_u64 << bit))
        })
    }

    /// Number of bids the allocation ranges over.
    #[must_use]
    pub fn bid_count(&self) -> usize {
        self.selected.len()
    }

    /// Number of selected bids.
    #[must_use]
    pub fn winner_count(&self) -> usize {
        self.selected.count_ones(..)
    }

    /// Whether bid `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(index)
    }

    /// Indices of the selected bids in ascending order.
    pub fn winners(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.ones()
    }

    /// Whether every bid selected here is also selected in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.selected.is_subset(&other.selected)
    }

    /// Total price of the selected bids; see [`price_of`].
    #[must_use]
    pub fn price(&self, bids: &[Bid]) -> u64 {
        price_of(self, bids)
    }

    /// Render the allocation as `0`/`1` characters, bid 0 first.
    #[must_use]
    pub fn bit_string(&self) -> String {
        (0..self.selected.len())
            .map(|bit| if self.selected.contains(bit) { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bit_string())
    }
}

/// Sum the prices of the bids selected by `allocation`.
///
/// The price ignores feasibility; pair it with
/// [`is_feasible`](crate::is_feasible) to judge a candidate. Selected indices
/// without a matching bid contribute nothing.
///
/// # Examples
/// ```
/// use wdp_core::{Allocation, Bid, price_of};
///
/// let bids = [Bid::from_items(1, [0], 10), Bid::from_items(1, [0], 20)];
/// assert_eq!(price_of(&Allocation::decode(0b11, 2), &bids), 30);
/// ```
#[must_use]
pub fn price_of(allocation: &Allocation, bids: &[Bid]) -> u64 {
    allocation
        .winners()
        .filter_map(|index| bids.get(index))
        .map(Bid::price)
        .fold(0_u64, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(0b1, 1)]
    #[case(0b1011, 4)]
    #[case(u64::MAX >> 2, 62)]
    fn decode_then_encode_is_identity(#[case] mask: u64, #[case] bids: usize) {
        let allocation = Allocation::decode(mask, bids);
        assert_eq!(allocation.bid_count(), bids);
        assert_eq!(allocation.encode(), Some(mask));
    }

    #[rstest]
    fn decode_drops_bits_beyond_width() {
        let allocation = Allocation::decode(0b1110, 2);
        assert_eq!(allocation.encode(), Some(0b10));
    }

    #[rstest]
    fn encode_rejects_selections_past_sixty_four_bits() {
        let allocation = Allocation::from_winners(80, [3, 70]);
        assert_eq!(allocation.encode(), None);
    }

    #[rstest]
    fn from_winners_ignores_out_of_range_indices() {
        let allocation = Allocation::from_winners(3, [0, 2, 9]);
        assert_eq!(allocation.winners().collect::<Vec<_>>(), vec![0, 2]);
        assert!(allocation.contains(2));
        assert!(!allocation.contains(1));
        assert!(!allocation.contains(9));
    }

    #[rstest]
    fn bit_string_lists_bid_zero_first() {
        assert_eq!(Allocation::decode(0b0001, 4).bit_string(), "1000");
        assert_eq!(Allocation::empty(3).to_string(), "000");
    }

    #[rstest]
    fn price_ignores_feasibility() {
        let bids = [
            Bid::from_items(2, [0, 1], 25),
            Bid::from_items(2, [0], 10),
        ];
        assert_eq!(price_of(&Allocation::decode(0b11, 2), &bids), 35);
        assert_eq!(price_of(&Allocation::empty(2), &bids), 0);
    }
}
