use thiserror::Error;
use wdp_core::AuctionError;

/// Errors raised while generating auctions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// The price range contains no values.
    #[error("price range {min}..={max} is empty")]
    EmptyPriceRange {
        /// Lower bound of the range.
        min: u64,
        /// Upper bound of the range.
        max: u64,
    },
    /// The pick probability is not a probability.
    #[error("pick odds {odds} must lie within [0, 1]")]
    InvalidPickOdds {
        /// Rejected probability.
        odds: f64,
    },
    /// More bidders than any solver can search.
    #[error("{bidders} bidders exceed the supported maximum of {max}")]
    TooManyBidders {
        /// Requested bidder count.
        bidders: usize,
        /// Largest supported bid count.
        max: usize,
    },
    /// The generated instance failed validation.
    #[error("generated auction is invalid")]
    Auction(#[from] AuctionError),
}
