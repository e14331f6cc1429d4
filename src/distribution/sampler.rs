use rand::{
    SeedableRng,
    distributions::{Distribution, Uniform},
    rngs::StdRng,
};
use statrs::distribution::{Beta, LogNormal, Normal};
use tracing::debug;

use crate::{
    config::EngineConfig,
    distribution::{DistributionSpec, Law},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Draws fixed-size sample arrays from written distributions.
///
/// A sampler owns the random source of one engine. Seeding it with the same
/// value reproduces the same draws; an unseeded sampler takes fresh entropy
/// from the operating system.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng:    StdRng,
    config: EngineConfig,
}

impl Sampler {
    /// Creates a sampler for the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = config.seed
                        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { rng, config }
    }

    /// The configuration this sampler fits and draws with.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves `spec` and draws exactly `config.samples` values from it.
    ///
    /// # Errors
    /// Fails with `RuntimeError::DistributionFit` when the specification
    /// cannot be fitted, and with `RuntimeError::Overflow` if a draw is not
    /// finite.
    ///
    /// # Example
    /// ```
    /// use fermi::{
    ///     EngineConfig,
    ///     distribution::{DistributionSpec, Family, Sampler},
    /// };
    ///
    /// let mut sampler = Sampler::new(EngineConfig::seeded(1).with_samples(1_000));
    /// let spec = DistributionSpec::Interval { family: Family::Uniform,
    ///                                         low:    5.0,
    ///                                         high:   10.0, };
    ///
    /// let draws = sampler.sample(&spec).unwrap();
    /// assert_eq!(draws.len(), 1_000);
    /// assert!(draws.iter().all(|x| (5.0..=10.0).contains(x)));
    /// ```
    pub fn sample(&mut self, spec: &DistributionSpec) -> EvalResult<Vec<f64>> {
        let law = Law::resolve(spec, &self.config)?;
        self.draw(law)
    }

    /// Draws exactly `config.samples` values from an already resolved law.
    ///
    /// # Errors
    /// `RuntimeError::DistributionFit` for parameters the law rejects, such
    /// as a uniform range whose width overflows, and `RuntimeError::Overflow`
    /// for non-finite draws.
    pub fn draw(&mut self, law: Law) -> EvalResult<Vec<f64>> {
        let draws = match law {
            Law::Uniform { min, max } => {
                if !(min <= max && (max - min).is_finite()) {
                    return Err(RuntimeError::fit(format!("cannot sample uniformly between {min} and {max}")));
                }
                self.draw_from(&Uniform::new_inclusive(min, max))
            },
            Law::Normal { mean, std_dev } => {
                self.draw_from(&Normal::new(mean, std_dev).map_err(|e| RuntimeError::fit(e.to_string()))?)
            },
            Law::LogNormal { location, scale } => {
                self.draw_from(&LogNormal::new(location, scale).map_err(|e| RuntimeError::fit(e.to_string()))?)
            },
            Law::Beta { alpha, beta } => {
                self.draw_from(&Beta::new(alpha, beta).map_err(|e| RuntimeError::fit(e.to_string()))?)
            },
        };

        if draws.iter().any(|x| !x.is_finite()) {
            return Err(RuntimeError::Overflow { details: format!("samples of {law:?}") });
        }

        debug!(?law, samples = draws.len(), "drew samples");
        Ok(draws)
    }

    fn draw_from<D: Distribution<f64>>(&mut self, law: &D) -> Vec<f64> {
        (0..self.config.samples).map(|_| law.sample(&mut self.rng))
                                .collect()
    }
}
