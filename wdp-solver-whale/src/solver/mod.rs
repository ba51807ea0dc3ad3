//! `WhaleSolver` and the search loop behind it.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wdp_core::{Bid, Diagnostics, SearchResult, SearchSpace, SolveError, Solver};

use crate::WhaleConfig;
use crate::population::{Coefficients, Pod, Whale};

/// Heuristic solver driven by the Whale Optimization Algorithm.
///
/// Every call to [`Solver::solve`] seeds a fresh [`ChaCha8Rng`] from
/// [`WhaleConfig::seed`], so repeated solves of the same bids agree.
#[derive(Debug, Clone)]
pub struct WhaleSolver {
    config: WhaleConfig,
}

impl WhaleSolver {
    /// Construct a solver with default hyperparameters and the given
    /// iteration budget.
    #[must_use]
    pub const fn new(iterations: u64) -> Self {
        Self::with_config(WhaleConfig::new(iterations))
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: WhaleConfig) -> Self {
        Self { config }
    }

    /// The solver's hyperparameters.
    #[must_use]
    pub const fn config(&self) -> &WhaleConfig {
        &self.config
    }

    /// Solve with a caller-owned random source instead of the configured
    /// seed.
    ///
    /// # Errors
    ///
    /// See [`whale_optimization_with`].
    pub fn solve_with_rng<R>(&self, bids: &[Bid], rng: &mut R) -> Result<SearchResult, SolveError>
    where
        R: Rng + ?Sized,
    {
        whale_optimization_with(bids, &self.config, rng)
    }
}

impl Solver for WhaleSolver {
    fn name(&self) -> &'static str {
        "whale"
    }

    fn solve(&self, bids: &[Bid]) -> Result<SearchResult, SolveError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.solve_with_rng(bids, &mut rng)
    }
}

/// Run `iterations + 1` iterations of the Whale Optimization Algorithm with
/// default hyperparameters.
///
/// # Errors
///
/// Returns [`SolveError::SearchSpaceTooLarge`] when the bid count exceeds
/// [`wdp_core::MAX_BIDS`].
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use wdp_core::{Bid, is_feasible};
/// use wdp_solver_whale::whale_optimization;
///
/// # fn main() -> Result<(), wdp_core::SolveError> {
/// let bids = [Bid::from_items(2, [0, 1], 25), Bid::from_items(2, [0], 10)];
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let result = whale_optimization(&bids, 200, &mut rng)?;
/// assert!(is_feasible(&result.allocation, &bids));
/// assert!(result.price <= 25);
/// # Ok(())
/// # }
/// ```
pub fn whale_optimization<R>(
    bids: &[Bid],
    iterations: u64,
    rng: &mut R,
) -> Result<SearchResult, SolveError>
where
    R: Rng + ?Sized,
{
    whale_optimization_with(bids, &WhaleConfig::new(iterations), rng)
}

/// Run the Whale Optimization Algorithm with explicit hyperparameters.
///
/// Random draws come from `rng` in a fixed order: the initial positions,
/// then `r1` and `r2`, then per iteration `p` followed by each whale's move
/// parameters in population order. [`WhaleConfig::seed`] is ignored.
///
/// # Errors
///
/// Returns [`SolveError::InvalidConfig`] for invalid hyperparameters and
/// [`SolveError::SearchSpaceTooLarge`] when the bid count exceeds
/// [`wdp_core::MAX_BIDS`]. Once the search starts it always succeeds.
pub fn whale_optimization_with<R>(
    bids: &[Bid],
    config: &WhaleConfig,
    rng: &mut R,
) -> Result<SearchResult, SolveError>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    let space = SearchSpace::for_bids(bids)?;
    let started_at = Instant::now();
    log::debug!(
        "whale search over {} allocations: {} whales, {} iterations",
        space.size(),
        config.population,
        config.iterations
    );

    let mut pod = Pod::scatter(config.population, space, bids, config.parallel, rng);
    let r1: f64 = rng.gen_range(0.0..1.0);
    let r2: f64 = rng.gen_range(0.0..1.0);

    let mut best = Whale::default();
    for t in 0..=config.iterations {
        pod.evaluate();
        let fittest = pod.fittest(best);
        if fittest.fitness > best.fitness {
            log::debug!(
                "iteration {t}: best fitness {} at {:#b}",
                fittest.fitness,
                fittest.position
            );
        }
        best = fittest;

        let coefficients =
            Coefficients::for_iteration(t, config.decay, r1, r2, rng.gen_range(0.0..1.0));
        let moves = pod.plan(&coefficients, rng);
        pod.advance(&moves, best.position, &coefficients, config.spiral_constant);
    }

    let population = u64::try_from(config.population).unwrap_or(u64::MAX);
    let result = SearchResult {
        allocation: space.decode(best.position),
        price: best.fitness,
        diagnostics: Diagnostics {
            elapsed: started_at.elapsed(),
            evaluations: population.saturating_mul(config.iterations.saturating_add(1)),
        },
    };
    log::info!(
        "whale search finished: price {} over {} bids in {:?}",
        result.price,
        space.bids(),
        result.elapsed()
    );
    Ok(result)
}
