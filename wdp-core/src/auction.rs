//! A complete auction instance: price table plus bids.

use thiserror::Error;

use crate::{Bid, Item};

/// Errors returned by [`Auction::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuctionError {
    /// An item's index does not match its position in the price table.
    #[error("item at position {position} carries index {index}")]
    MisnumberedItem {
        /// Position of the item in the table.
        position: usize,
        /// Index recorded on the item.
        index: usize,
    },
    /// A bid requests an item missing from the price table.
    #[error("bid {bid} requests item {item} but only {items} items exist")]
    UnknownItem {
        /// Position of the offending bid.
        bid: usize,
        /// Requested item index.
        item: usize,
        /// Number of items in the table.
        items: usize,
    },
}

/// The items on offer and the bids placed on them for one auction round.
///
/// # Examples
/// ```
/// use wdp_core::{Auction, Bid, Item};
///
/// # fn main() -> Result<(), wdp_core::AuctionError> {
/// let items = vec![Item::new(0, 10), Item::new(1, 20)];
/// let bids = vec![Bid::from_items(2, [0], 10), Bid::from_items(2, [1], 20)];
/// let auction = Auction::new(items, bids)?;
/// assert_eq!(auction.bid_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "AuctionRecord", into = "AuctionRecord")
)]
pub struct Auction {
    items: Vec<Item>,
    bids: Vec<Bid>,
}

impl Auction {
    /// Validate and construct an [`Auction`].
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::MisnumberedItem`] when item indices are not
    /// `0..n`, and [`AuctionError::UnknownItem`] when a bid requests an item
    /// outside the table.
    ///
    /// Every bid's item set is widened to the size of the price table.
    pub fn new(items: Vec<Item>, bids: Vec<Bid>) -> Result<Self, AuctionError> {
        if let Some((position, item)) = items
            .iter()
            .enumerate()
            .find(|(position, item)| item.index() != *position)
        {
            return Err(AuctionError::MisnumberedItem {
                position,
                index: item.index(),
            });
        }
        for (position, bid) in bids.iter().enumerate() {
            if let Some(item) = bid.requested().find(|item| *item >= items.len()) {
                return Err(AuctionError::UnknownItem {
                    bid: position,
                    item,
                    items: items.len(),
                });
            }
        }
        let width = items.len();
        let bids = bids.into_iter().map(|bid| bid.widened(width)).collect();
        Ok(Self { items, bids })
    }

    /// The price table.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The bids in submission order.
    #[must_use]
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    /// Number of items on offer.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of bids `m`.
    #[must_use]
    pub const fn bid_count(&self) -> usize {
        self.bids.len()
    }

    /// Take ownership of the bids.
    #[must_use]
    pub fn into_bids(self) -> Vec<Bid> {
        self.bids
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct AuctionRecord {
    items: Vec<Item>,
    bids: Vec<Bid>,
}

#[cfg(feature = "serde")]
impl TryFrom<AuctionRecord> for Auction {
    type Error = AuctionError;

    fn try_from(record: AuctionRecord) -> Result<Self, Self::Error> {
        Self::new(record.items, record.bids)
    }
}

#[cfg(feature = "serde")]
impl From<Auction> for AuctionRecord {
    fn from(auction: Auction) -> Self {
        Self {
            items: auction.items,
            bids: auction.bids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn catalogue(n: usize) -> Vec<Item> {
        (0..n).map(|index| Item::new(index, 10)).collect()
    }

    #[rstest]
    fn rejects_bids_on_unknown_items() {
        let bids = vec![Bid::from_items(2, [0], 10), Bid::from_items(4, [3], 10)];
        let err = Auction::new(catalogue(2), bids).expect_err("item 3 is unknown");
        assert_eq!(
            err,
            AuctionError::UnknownItem {
                bid: 1,
                item: 3,
                items: 2
            }
        );
    }

    #[rstest]
    fn bids_are_widened_to_the_price_table() {
        let auction =
            Auction::new(catalogue(5), vec![Bid::from_items(1, [0], 10)]).expect("valid auction");
        assert_eq!(auction.bids().first().map(|bid| bid.items().len()), Some(5));
        let bids = auction.into_bids();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids.first().map(Bid::price), Some(10));
    }

    #[rstest]
    fn rejects_misnumbered_items() {
        let items = vec![Item::new(0, 10), Item::new(2, 10)];
        let err = Auction::new(items, Vec::new()).expect_err("index gap");
        assert!(matches!(
            err,
            AuctionError::MisnumberedItem {
                position: 1,
                index: 2
            }
        ));
    }

    #[rstest]
    fn accepts_degenerate_instances() {
        let auction = Auction::new(Vec::new(), Vec::new()).expect("empty auction is valid");
        assert_eq!(auction.bid_count(), 0);
        let auction =
            Auction::new(catalogue(3), vec![Bid::from_items(3, [], 0)]).expect("empty bundle");
        assert_eq!(auction.item_count(), 3);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn json_round_trip_preserves_instance() {
        let bids = vec![Bid::from_items(3, [0, 2], 20), Bid::from_items(3, [1], 10)];
        let auction = Auction::new(catalogue(3), bids).expect("valid auction");
        let json = serde_json::to_string(&auction).expect("serialise auction");
        let decoded: Auction = serde_json::from_str(&json).expect("decode auction");
        assert_eq!(decoded, auction);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn json_with_unknown_items_is_rejected() {
        let json = r#"{"items":[{"index":0,"price":5}],"bids":[{"items":[4],"price":5}]}"#;
        let err = serde_json::from_str::<Auction>(json).expect_err("item 4 is unknown");
        assert!(err.to_string().contains("requests item 4"));
    }
}
