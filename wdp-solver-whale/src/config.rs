use wdp_core::SolveError;

/// Hyperparameters for [`WhaleSolver`](crate::WhaleSolver).
///
/// Only the iteration budget has no default.
///
/// # Examples
/// ```
/// use wdp_solver_whale::WhaleConfig;
///
/// let config = WhaleConfig {
///     population: 16,
///     ..WhaleConfig::new(1_000)
/// };
/// assert_eq!(config.iterations, 1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhaleConfig {
    /// Number of whales in the population.
    pub population: usize,
    /// Iteration budget `T`; the search runs `T + 1` iterations.
    pub iterations: u64,
    /// Per-iteration decrease of the `a` coefficient.
    pub decay: f64,
    /// Logarithmic spiral shape constant `b`.
    pub spiral_constant: f64,
    /// Seed for the generator [`WhaleSolver`](crate::WhaleSolver) creates per
    /// solve.
    pub seed: u64,
    /// Evaluate and move whales on the rayon thread pool.
    pub parallel: bool,
}

impl WhaleConfig {
    /// Default population size.
    pub const DEFAULT_POPULATION: usize = 10;
    /// Default decrease of `a` per iteration.
    pub const DEFAULT_DECAY: f64 = 1e-10;
    /// Default spiral shape constant.
    pub const DEFAULT_SPIRAL_CONSTANT: f64 = 1e-6;

    /// Default hyperparameters with the given iteration budget.
    #[must_use]
    pub const fn new(iterations: u64) -> Self {
        Self {
            population: Self::DEFAULT_POPULATION,
            iterations,
            decay: Self::DEFAULT_DECAY,
            spiral_constant: Self::DEFAULT_SPIRAL_CONSTANT,
            seed: 0,
            parallel: false,
        }
    }

    /// Check the hyperparameters before any search work starts.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidConfig`] for an empty population or a
    /// decay or spiral constant that is negative, infinite or NaN.
    pub const fn validate(&self) -> Result<(), SolveError> {
        if self.population == 0 {
            return Err(SolveError::InvalidConfig {
                reason: "population must contain at least one whale",
            });
        }
        if !is_non_negative(self.decay) {
            return Err(SolveError::InvalidConfig {
                reason: "decay must be finite and non-negative",
            });
        }
        if !is_non_negative(self.spiral_constant) {
            return Err(SolveError::InvalidConfig {
                reason: "spiral constant must be finite and non-negative",
            });
        }
        Ok(())
    }
}

const fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
