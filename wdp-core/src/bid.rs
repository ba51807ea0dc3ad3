//! Bids: exclusive bundles of items offered at a price.

use fixedbitset::FixedBitSet;

use crate::Item;

/// A bidder's request for an exclusive set of items at a stated price.
///
/// Bit `i` of the item set is set when the bid requests item `i`. Bids are
/// immutable once built; solvers only ever borrow them.
///
/// # Examples
/// ```
/// use wdp_core::Bid;
///
/// let bid = Bid::from_items(4, [0, 2], 35);
/// assert_eq!(bid.price(), 35);
/// assert_eq!(bid.requested().collect::<Vec<_>>(), vec![0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BidRecord", into = "BidRecord"))]
pub struct Bid {
    items: FixedBitSet,
    price: u64,
}

impl Bid {
    /// Construct a bid from a prepared item set and an independently
    /// assigned price.
    #[must_use]
    pub const fn new(items: FixedBitSet, price: u64) -> Self {
        Self { items, price }
    }

    /// Construct a bid over `n_items` items requesting the listed indices.
    ///
    /// The item set grows when an index lies beyond `n_items`; callers that
    /// need the indices checked against a price table should go through
    /// [`Auction::new`](crate::Auction::new).
    #[must_use]
    pub fn from_items<I>(n_items: usize, items: I, price: u64) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = FixedBitSet::with_capacity(n_items);
        for index in items {
            if index >= set.len() {
                set.grow(index.saturating_add(1));
            }
            set.insert(index);
        }
        Self::new(set, price)
    }

    /// Construct a bid priced at the sum of the requested items' prices.
    ///
    /// Bits without a matching entry in `items` contribute nothing.
    ///
    /// # Examples
    /// ```
    /// use fixedbitset::FixedBitSet;
    /// use wdp_core::{Bid, Item};
    ///
    /// let items = [Item::new(0, 10), Item::new(1, 20), Item::new(2, 40)];
    /// let mut wanted = FixedBitSet::with_capacity(3);
    /// wanted.insert(0);
    /// wanted.insert(2);
    /// assert_eq!(Bid::priced_from(wanted, &items).price(), 50);
    /// ```
    #[must_use]
    pub fn priced_from(items: FixedBitSet, catalogue: &[Item]) -> Self {
        let price = items
            .ones()
            .filter_map(|index| catalogue.get(index))
            .map(Item::price)
            .fold(0_u64, u64::saturating_add);
        Self::new(items, price)
    }

    /// The requested item set.
    #[must_use]
    pub const fn items(&self) -> &FixedBitSet {
        &self.items
    }

    /// Price offered for the whole bundle.
    #[must_use]
    pub const fn price(&self) -> u64 {
        self.price
    }

    /// Indices of the requested items in ascending order.
    pub fn requested(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.ones()
    }

    /// Whether the bid requests no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_clear()
    }

    /// The same bid with its item set grown to at least `n_items` bits.
    pub(crate) fn widened(mut self, n_items: usize) -> Self {
        if self.items.len() < n_items {
            self.items.grow(n_items);
        }
        self
    }

    /// Whether both bids ask for at least one common item.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        !self.items.is_disjoint(&other.items)
    }
}

/// Wire form of a [`Bid`]: the item set is written as sorted indices.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BidRecord {
    items: Vec<usize>,
    price: u64,
}

#[cfg(feature = "serde")]
impl From<BidRecord> for Bid {
    fn from(record: BidRecord) -> Self {
        let width = record
            .items
            .iter()
            .max()
            .map_or(0, |highest| highest.saturating_add(1));
        Self::from_items(width, record.items, record.price)
    }
}

#[cfg(feature = "serde")]
impl From<Bid> for BidRecord {
    fn from(bid: Bid) -> Self {
        Self {
            items: bid.requested().collect(),
            price: bid.price,
        }
    }
}
