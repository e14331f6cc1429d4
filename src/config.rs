/// Number of Monte Carlo draws held by every sample array.
pub const N_SAMPLES: usize = 100_000;
/// Standard normal quantile of the 95th percentile. A 90% confidence interval
/// spans `mean ± Z_95 * std_dev`.
pub const Z_95: f64 = 1.644_853_626_951_472_2;
/// Absolute tolerance on both fitted percentiles of a beta confidence
/// interval.
pub const FIT_TOLERANCE: f64 = 1e-4;
/// Iteration cap of the beta confidence-interval fit.
pub const FIT_MAX_ITERATIONS: usize = 100;

/// Tunables consumed by one engine.
///
/// Every engine owns its own copy, so two models evaluated side by side never
/// share a random source or a sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Length of every sample array produced during evaluation.
    pub samples:            usize,
    /// z-score of the upper bound of a 90% confidence interval.
    pub z_score:            f64,
    /// Convergence tolerance of the beta fit, in percentile units.
    pub fit_tolerance:      f64,
    /// Maximum number of Newton steps taken by the beta fit.
    pub fit_max_iterations: usize,
    /// Fixed seed for reproducible runs. `None` draws a fresh seed from the
    /// operating system.
    pub seed:               Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { samples:            N_SAMPLES,
               z_score:            Z_95,
               fit_tolerance:      FIT_TOLERANCE,
               fit_max_iterations: FIT_MAX_ITERATIONS,
               seed:               None, }
    }
}

impl EngineConfig {
    /// Returns the default configuration with a fixed seed.
    ///
    /// # Example
    /// ```
    /// use fermi::EngineConfig;
    ///
    /// let config = EngineConfig::seeded(7);
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.samples, 100_000);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed),
               ..Self::default() }
    }

    /// Returns a copy of this configuration with a different sample count.
    #[must_use]
    pub const fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }
}
