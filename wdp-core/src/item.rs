//! Items offered in an auction.

/// A single item for sale, identified by its position in the price table.
///
/// # Examples
/// ```
/// use wdp_core::Item;
///
/// let item = Item::new(3, 250);
/// assert_eq!(item.index(), 3);
/// assert_eq!(item.price(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    index: usize,
    price: u64,
}

impl Item {
    /// Construct an item at `index` with the given unit price.
    #[must_use]
    pub const fn new(index: usize, price: u64) -> Self {
        Self { index, price }
    }

    /// Position of the item in the auction's price table.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Price of the item.
    #[must_use]
    pub const fn price(&self) -> u64 {
        self.price
    }
}
