//! Price tables, bundles and whole auctions drawn at random.

use std::ops::RangeInclusive;

use rand::Rng;
use wdp_core::{Auction, Bid, Item, MAX_BIDS};

use crate::GenerateError;

/// Parameters of the random auction model.
///
/// # Examples
/// ```
/// use wdp_data::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.price_range(), &(10..=1000));
/// assert_eq!(config.pick_odds(), 0.25);
/// assert!(GeneratorConfig::new(10..=20, 1.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    price_range: RangeInclusive<u64>,
    pick_odds: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            price_range: 10..=1000,
            pick_odds: 0.25,
        }
    }
}

impl GeneratorConfig {
    /// Validate and build a generator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyPriceRange`] when the range holds no
    /// values and [`GenerateError::InvalidPickOdds`] when `pick_odds` lies
    /// outside `[0, 1]` or is NaN.
    pub fn new(price_range: RangeInclusive<u64>, pick_odds: f64) -> Result<Self, GenerateError> {
        if price_range.is_empty() {
            return Err(GenerateError::EmptyPriceRange {
                min: *price_range.start(),
                max: *price_range.end(),
            });
        }
        if !(0.0..=1.0).contains(&pick_odds) {
            return Err(GenerateError::InvalidPickOdds { odds: pick_odds });
        }
        Ok(Self {
            price_range,
            pick_odds,
        })
    }

    /// Inclusive range item prices are drawn from.
    #[must_use]
    pub const fn price_range(&self) -> &RangeInclusive<u64> {
        &self.price_range
    }

    /// Probability that a bidder picks any given item.
    #[must_use]
    pub const fn pick_odds(&self) -> f64 {
        self.pick_odds
    }
}

/// Draw a price table of `n_items` items indexed `0..n_items`.
pub fn generate_items<R>(n_items: usize, config: &GeneratorConfig, rng: &mut R) -> Vec<Item>
where
    R: Rng + ?Sized,
{
    (0..n_items)
        .map(|index| Item::new(index, rng.gen_range(config.price_range.clone())))
        .collect()
}

/// Draw one bid: each item is picked independently, and the bid's price is
/// the sum of the picked items' prices.
pub fn random_bid<R>(items: &[Item], config: &GeneratorConfig, rng: &mut R) -> Bid
where
    R: Rng + ?Sized,
{
    let picked: Vec<&Item> = items
        .iter()
        .filter(|_| rng.gen_bool(config.pick_odds))
        .collect();
    let price = picked
        .iter()
        .map(|item| item.price())
        .fold(0_u64, u64::saturating_add);
    Bid::from_items(items.len(), picked.iter().map(|item| item.index()), price)
}

/// Draw a complete auction with one bid per bidder.
///
/// # Errors
///
/// Returns [`GenerateError::TooManyBidders`] when `n_bidders` exceeds
/// [`MAX_BIDS`].
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use wdp_data::{GeneratorConfig, random_auction};
///
/// # fn main() -> Result<(), wdp_data::GenerateError> {
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let auction = random_auction(15, 20, &GeneratorConfig::default(), &mut rng)?;
/// assert_eq!(auction.bid_count(), 15);
/// assert_eq!(auction.item_count(), 20);
/// # Ok(())
/// # }
/// ```
pub fn random_auction<R>(
    n_bidders: usize,
    n_items: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Auction, GenerateError>
where
    R: Rng + ?Sized,
{
    if n_bidders > MAX_BIDS {
        return Err(GenerateError::TooManyBidders {
            bidders: n_bidders,
            max: MAX_BIDS,
        });
    }
    let items = generate_items(n_items, config, rng);
    let bids = (0..n_bidders)
        .map(|_| random_bid(&items, config, rng))
        .collect();
    let auction = Auction::new(items, bids)?;
    log::debug!(
        "generated auction with {} items and {} bids",
        auction.item_count(),
        auction.bid_count()
    );
    Ok(auction)
}
