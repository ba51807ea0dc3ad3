//! Whales and the moves that relocate them.

use std::f64::consts::PI;

use rand::Rng;
use rayon::prelude::*;
use wdp_core::{Bid, SearchSpace, fitness};

/// A search agent: a position in the search space and the fitness of the
/// allocation found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Whale {
    pub(crate) position: u64,
    pub(crate) fitness: u64,
}

impl Whale {
    const fn at(position: u64) -> Self {
        Self {
            position,
            fitness: 0,
        }
    }
}

/// Coefficients shared by every whale during one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Coefficients {
    /// `A = 2·a·r1 − a`; its magnitude picks encircling or exploration.
    pub(crate) step: f64,
    /// `C = 2·r2`.
    pub(crate) pull: f64,
    /// Chooses between shrinking (`p < 0.5`) and spiralling.
    pub(crate) p: f64,
}

impl Coefficients {
    /// Coefficients for iteration `t` where `a = 2 − t·decay`.
    #[expect(
        clippy::float_arithmetic,
        reason = "the coefficient schedule is defined over reals"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "iteration counts far below 2^52 convert exactly"
    )]
    pub(crate) const fn for_iteration(t: u64, decay: f64, r1: f64, r2: f64, p: f64) -> Self {
        let a = 2.0 - (t as f64) * decay;
        Self {
            step: 2.0 * a * r1 - a,
            pull: 2.0 * r2,
            p,
        }
    }

    const fn shrinking(&self) -> bool {
        self.p < 0.5
    }
}

/// How a single whale moves in the current iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Move {
    /// Close in on the best whale found so far.
    Encircle,
    /// Swim relative to another whale's position from before this update.
    Explore { partner: u64 },
    /// Spiral towards the best whale with spiral parameter `t ∈ [−1, 1)`.
    Spiral { t: f64 },
}

/// The population together with the search space it lives in.
#[derive(Debug)]
pub(crate) struct Pod<'a> {
    whales: Vec<Whale>,
    space: SearchSpace,
    bids: &'a [Bid],
    parallel: bool,
}

impl<'a> Pod<'a> {
    /// Scatter `size` whales uniformly over the search space.
    pub(crate) fn scatter<R>(
        size: usize,
        space: SearchSpace,
        bids: &'a [Bid],
        parallel: bool,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let whales = (0..size)
            .map(|_| Whale::at(rng.gen_range(space.positions())))
            .collect();
        Self {
            whales,
            space,
            bids,
            parallel,
        }
    }

    /// Score every whale's current position.
    pub(crate) fn evaluate(&mut self) {
        let space = self.space;
        let bids = self.bids;
        let score = |whale: &mut Whale| {
            whale.fitness = fitness(&space.decode(whale.position), bids);
        };
        if self.parallel {
            self.whales.par_iter_mut().for_each(score);
        } else {
            self.whales.iter_mut().for_each(score);
        }
    }

    /// Fold the population into `best`, replacing it only on strictly
    /// greater fitness so the first whale wins ties.
    pub(crate) fn fittest(&self, incumbent: Whale) -> Whale {
        self.whales.iter().fold(incumbent, |best, whale| {
            if whale.fitness > best.fitness {
                *whale
            } else {
                best
            }
        })
    }

    /// Draw each whale's move for this iteration, in population order.
    ///
    /// Draws happen sequentially before any whale moves, which keeps the
    /// random stream independent of [`Pod::advance`] running in parallel.
    pub(crate) fn plan<R>(&self, coefficients: &Coefficients, rng: &mut R) -> Vec<Move>
    where
        R: Rng + ?Sized,
    {
        let exploring = coefficients.step.abs() >= 1.0;
        (0..self.whales.len())
            .map(|_| {
                if !coefficients.shrinking() {
                    Move::Spiral {
                        t: rng.gen_range(-1.0..1.0),
                    }
                } else if exploring {
                    let partner = rng.gen_range(0..self.whales.len());
                    Move::Explore {
                        partner: self
                            .whales
                            .get(partner)
                            .map_or(0, |whale| whale.position),
                    }
                } else {
                    Move::Encircle
                }
            })
            .collect()
    }

    /// Apply the planned moves relative to the `leader` position.
    pub(crate) fn advance(
        &mut self,
        moves: &[Move],
        leader: u64,
        coefficients: &Coefficients,
        spiral_constant: f64,
    ) {
        let space = self.space;
        let relocate = |(whale, step): (&mut Whale, &Move)| {
            let target = displace(whale.position, *step, leader, coefficients, spiral_constant);
            whale.position = space.wrap(target);
        };
        if self.parallel {
            self.whales.par_iter_mut().zip(moves.par_iter()).for_each(relocate);
        } else {
            self.whales.iter_mut().zip(moves.iter()).for_each(relocate);
        }
    }

    #[cfg(test)]
    pub(crate) fn from_positions(
        positions: &[u64],
        space: SearchSpace,
        bids: &'a [Bid],
    ) -> Self {
        Self {
            whales: positions.iter().copied().map(Whale::at).collect(),
            space,
            bids,
            parallel: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn whales(&self) -> &[Whale] {
        &self.whales
    }
}

/// Real-valued target position of one whale before wrapping.
#[expect(
    clippy::float_arithmetic,
    reason = "whale moves are defined over reals"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "positions above 2^53 lose low bits, as any real-valued move does"
)]
pub(crate) fn displace(
    position: u64,
    step: Move,
    leader: u64,
    coefficients: &Coefficients,
    spiral_constant: f64,
) -> f64 {
    let x = position as f64;
    let best = leader as f64;
    match step {
        Move::Encircle => {
            let distance = (coefficients.pull * best - x).abs();
            best - coefficients.step * distance
        }
        Move::Explore { partner } => {
            let other = partner as f64;
            let distance = (coefficients.pull * other - x).abs();
            other - coefficients.step * distance
        }
        Move::Spiral { t } => {
            let distance = (best - x).abs();
            distance * (t * spiral_constant).exp() * (PI * t).cos() + best
        }
    }
}
