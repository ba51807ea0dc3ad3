//! The space of all allocations over a fixed number of bids.

use std::ops::Range;

use crate::{Allocation, Bid, SolveError};

/// Largest bid count whose search space fits a 64-bit position.
///
/// Capping at 62 keeps every position representable as a signed 64-bit
/// integer as well.
pub const MAX_BIDS: usize = 62;

/// The `2^m` allocations over `m` bids, addressed by integer position.
///
/// Construction enforces [`MAX_BIDS`], so every position of a valid space
/// fits a `u64`.
///
/// # Examples
/// ```
/// use wdp_core::SearchSpace;
///
/// # fn main() -> Result<(), wdp_core::SolveError> {
/// let space = SearchSpace::new(3)?;
/// assert_eq!(space.size(), 8);
/// assert_eq!(space.decode(0b110).winners().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(space.wrap(9.0), 1);
/// assert_eq!(space.wrap(-1.0), 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSpace {
    bids: usize,
}

impl SearchSpace {
    /// Validate a bid count and build its search space.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::SearchSpaceTooLarge`] when `bids` exceeds
    /// [`MAX_BIDS`].
    pub const fn new(bids: usize) -> Result<Self, SolveError> {
        if bids > MAX_BIDS {
            return Err(SolveError::SearchSpaceTooLarge {
                bids,
                max: MAX_BIDS,
            });
        }
        Ok(Self { bids })
    }

    /// The search space over a bid collection.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::SearchSpaceTooLarge`] for more than
    /// [`MAX_BIDS`] bids.
    pub const fn for_bids(bids: &[Bid]) -> Result<Self, SolveError> {
        Self::new(bids.len())
    }

    /// Number of bids `m`.
    #[must_use]
    pub const fn bids(&self) -> usize {
        self.bids
    }

    /// Number of allocations, `2^m`.
    #[must_use]
    pub const fn size(&self) -> u64 {
        1_u64 << self.bids
    }

    /// Every position in enumeration order.
    #[must_use]
    pub const fn positions(&self) -> Range<u64> {
        0..self.size()
    }

    /// Decode a position into its allocation.
    #[must_use]
    pub fn decode(&self, position: u64) -> Allocation {
        Allocation::decode(position, self.bids)
    }

    /// Map a real-valued position back into `0..2^m`.
    ///
    /// The value is truncated towards zero, saturating at the bounds of
    /// `i128` (NaN maps to zero), and then reduced with a Euclidean modulo so
    /// that out-of-range values wrap around instead of clamping. Negative
    /// values therefore wrap from the top of the space.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float-to-int casts saturate, which is the documented behaviour"
    )]
    pub fn wrap(&self, position: f64) -> u64 {
        let size = i128::from(self.size());
        let wrapped = (position as i128).rem_euclid(size);
        u64::try_from(wrapped).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(10, 1024)]
    #[case(MAX_BIDS, 1 << 62)]
    fn size_is_two_to_the_bid_count(#[case] bids: usize, #[case] expected: u64) {
        let space = SearchSpace::new(bids).expect("valid bid count");
        assert_eq!(space.size(), expected);
        assert_eq!(space.positions().end, expected);
    }

    #[rstest]
    fn oversized_spaces_are_rejected() {
        let err = SearchSpace::new(MAX_BIDS + 1).expect_err("63 bids overflow");
        assert_eq!(
            err,
            SolveError::SearchSpaceTooLarge {
                bids: 63,
                max: MAX_BIDS
            }
        );
    }

    #[rstest]
    #[case(5.0, 5)]
    #[case(5.9, 5)]
    #[case(16.0, 0)]
    #[case(17.5, 1)]
    #[case(-0.5, 0)]
    #[case(-1.0, 15)]
    #[case(-17.0, 15)]
    #[case(f64::NAN, 0)]
    fn wrap_truncates_then_wraps(#[case] raw: f64, #[case] expected: u64) {
        let space = SearchSpace::new(4).expect("valid bid count");
        assert_eq!(space.wrap(raw), expected);
    }

    #[rstest]
    fn wrap_keeps_huge_values_in_range() {
        let space = SearchSpace::new(MAX_BIDS).expect("valid bid count");
        assert!(space.wrap(f64::MAX) < space.size());
        assert!(space.wrap(f64::MIN) < space.size());
        assert!(space.wrap(f64::INFINITY) < space.size());
    }

    #[rstest]
    fn empty_space_has_single_position() {
        let space = SearchSpace::new(0).expect("zero bids are valid");
        assert_eq!(space.wrap(123.0), 0);
        assert_eq!(space.decode(0).winner_count(), 0);
    }
}
