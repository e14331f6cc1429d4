use statrs::distribution::{Beta, ContinuousCDF};
use tracing::{debug, trace};

use crate::{
    config::{EngineConfig, Z_95},
    distribution::{CI_LOWER_PROBABILITY, CI_UPPER_PROBABILITY, DistributionSpec, Family},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Bounds on `ln(alpha)` and `ln(beta)` explored by the beta fit, roughly
/// `1e-3 ..= 1e12`.
const LOG_SHAPE_MIN: f64 = -6.9;
const LOG_SHAPE_MAX: f64 = 27.6;
/// Above this concentration `alpha + beta` the beta quantiles come from a
/// Cornish-Fisher expansion; below it from statrs' exact inverse CDF.
const EXPANSION_CONCENTRATION: f64 = 1e4;
/// Largest Newton step, in log-shape units.
const MAX_LOG_STEP: f64 = 2.0;
/// Half-width of the central differences used for the Jacobian.
const JACOBIAN_STEP: f64 = 1e-5;
/// Smallest step fraction tried by the backtracking line search.
const MIN_STEP_SCALE: f64 = 1.0 / 1024.0;
/// Floor on the moment-matched concentration `alpha + beta`.
const MIN_CONCENTRATION: f64 = 0.5;

/// A fully parameterised law, ready to be sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Law {
    /// Flat on `[min, max]`.
    Uniform {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Gaussian.
    Normal {
        /// Mean.
        mean:    f64,
        /// Standard deviation.
        std_dev: f64,
    },
    /// Log-normal, parameterised by its underlying normal.
    LogNormal {
        /// Mean of the underlying normal (the log of the median).
        location: f64,
        /// Standard deviation of the underlying normal.
        scale:    f64,
    },
    /// Beta.
    Beta {
        /// First shape parameter.
        alpha: f64,
        /// Second shape parameter.
        beta:  f64,
    },
}

impl Law {
    /// Resolves a written distribution into concrete parameters.
    ///
    /// Interval forms are fitted so that their 5th and 95th percentiles land
    /// on the given bounds (uniform intervals are taken as the support).
    /// Explicit forms are validated and passed through.
    ///
    /// # Errors
    /// `RuntimeError::DistributionFit` when the bounds are not ordered, lie
    /// outside the family's domain, or the beta fit does not converge.
    ///
    /// # Example
    /// ```
    /// use fermi::{
    ///     EngineConfig,
    ///     distribution::{DistributionSpec, Family, Law},
    /// };
    ///
    /// let spec = DistributionSpec::Interval { family: Family::Normal,
    ///                                         low:    80.0,
    ///                                         high:   120.0, };
    /// let Law::Normal { mean, std_dev } = Law::resolve(&spec, &EngineConfig::default()).unwrap()
    /// else {
    ///     panic!("expected a normal law");
    /// };
    /// assert_eq!(mean, 100.0);
    /// assert!((std_dev - 12.16).abs() < 0.01);
    /// ```
    pub fn resolve(spec: &DistributionSpec, config: &EngineConfig) -> EvalResult<Self> {
        let law = match *spec {
            DistributionSpec::Interval { family, low, high } => {
                check_finite(low, high)?;
                if low >= high {
                    return Err(RuntimeError::fit(format!("lower bound {low} must be below upper bound {high}")));
                }
                check_width(low, high)?;
                match family {
                    Family::Uniform => Self::Uniform { min: low,
                                                       max: high, },
                    Family::Normal => fit_normal(low, high, config.z_score),
                    Family::LogNormal => fit_lognormal(low, high, config.z_score)?,
                    Family::Beta => fit_beta(low, high, config)?,
                }
            },
            DistributionSpec::Explicit { family,
                                         first,
                                         second, } => {
                check_finite(first, second)?;
                explicit(family, first, second)?
            },
        };
        debug!(%spec, ?law, "resolved distribution");
        Ok(law)
    }
}

fn check_finite(first: f64, second: f64) -> EvalResult<()> {
    if first.is_finite() && second.is_finite() {
        Ok(())
    } else {
        Err(RuntimeError::fit("parameters must be finite numbers"))
    }
}

/// The span of an interval must itself be a finite number.
fn check_width(low: f64, high: f64) -> EvalResult<()> {
    if (high - low).is_finite() {
        Ok(())
    } else {
        Err(RuntimeError::fit(format!("interval from {low} to {high} is too wide to sample")))
    }
}

fn explicit(family: Family, first: f64, second: f64) -> EvalResult<Law> {
    match family {
        Family::Uniform if first < second => {
            check_width(first, second)?;
            Ok(Law::Uniform { min: first,
                              max: second, })
        },
        Family::Uniform => Err(RuntimeError::fit(format!("uniform minimum {first} must be below maximum {second}"))),
        Family::Normal if second > 0.0 => Ok(Law::Normal { mean:    first,
                                                           std_dev: second, }),
        Family::Normal => Err(RuntimeError::fit(format!("normal standard deviation must be positive, got {second}"))),
        Family::LogNormal if first > 0.0 && second > 0.0 => {
            Ok(Law::LogNormal { location: first.ln(),
                                scale:    second, })
        },
        Family::LogNormal => Err(RuntimeError::fit(format!("lognormal median and shape must be positive, got {first} and {second}"))),
        Family::Beta if first > 0.0 && second > 0.0 => Ok(Law::Beta { alpha: first,
                                                                      beta:  second, }),
        Family::Beta => Err(RuntimeError::fit(format!("beta shape parameters must be positive, got {first} and {second}"))),
    }
}

/// Closed form: the interval is symmetric around the mean and spans
/// `2 * z` standard deviations.
fn fit_normal(low: f64, high: f64, z_score: f64) -> Law {
    Law::Normal { mean:    f64::midpoint(low, high),
                  std_dev: (high - low) / (2.0 * z_score), }
}

/// Closed form: the normal fit applied to the logarithms of the bounds.
fn fit_lognormal(low: f64, high: f64, z_score: f64) -> EvalResult<Law> {
    if low <= 0.0 {
        return Err(RuntimeError::fit(format!("lognormal bounds must be positive, got {low} and {high}")));
    }
    let (log_low, log_high) = (low.ln(), high.ln());
    Ok(Law::LogNormal { location: f64::midpoint(log_low, log_high),
                        scale:    (log_high - log_low) / (2.0 * z_score), })
}

/// Fits `Beta(alpha, beta)` so that its 5th and 95th percentiles match `low`
/// and `high`.
///
/// There is no closed form. The search runs a damped Newton iteration on
/// `(ln alpha, ln beta)`, starting from a moment-matched guess, with a
/// finite-difference Jacobian and a backtracking line search on the squared
/// residual. It succeeds once both percentiles are within
/// `config.fit_tolerance` of their targets.
fn fit_beta(low: f64, high: f64, config: &EngineConfig) -> EvalResult<Law> {
    if low <= 0.0 || high >= 1.0 {
        return Err(RuntimeError::fit(format!("beta bounds must lie strictly between 0 and 1, got {low} and {high}")));
    }

    let target = [low, high];
    let not_converged = || {
        RuntimeError::fit(format!("beta fit for {low} {high} did not converge within {} iterations",
                                  config.fit_max_iterations))
    };

    let mut point = initial_guess(low, high, config.z_score);
    let mut residual = beta_residual(point, target).ok_or_else(not_converged)?;

    for iteration in 0..=config.fit_max_iterations {
        let error = max_abs(residual);
        trace!(iteration,
               alpha = point[0].exp(),
               beta = point[1].exp(),
               error,
               "beta fit step");

        if error < config.fit_tolerance {
            let (alpha, beta) = (point[0].exp(), point[1].exp());
            debug!(alpha, beta, iterations = iteration, "beta fit converged");
            return Ok(Law::Beta { alpha, beta });
        }
        if iteration == config.fit_max_iterations {
            break;
        }

        let step = newton_step(point, residual).ok_or_else(not_converged)?;
        (point, residual) = line_search(point, residual, step, target).ok_or_else(not_converged)?;
    }

    if point.iter().any(|p| *p >= LOG_SHAPE_MAX) {
        return Err(RuntimeError::fit(format!("beta interval {low} {high} is too narrow to fit")));
    }
    Err(not_converged())
}

/// Moment matching: treat the interval as `mean ± z * sd` and solve the beta
/// mean/variance equations for the shapes.
fn initial_guess(low: f64, high: f64, z_score: f64) -> [f64; 2] {
    let mean = f64::midpoint(low, high);
    let spread = (high - low) / (2.0 * z_score);
    let concentration = (mean * (1.0 - mean) / (spread * spread) - 1.0).max(MIN_CONCENTRATION);

    [(mean * concentration).ln().clamp(LOG_SHAPE_MIN, LOG_SHAPE_MAX),
     ((1.0 - mean) * concentration).ln()
                                   .clamp(LOG_SHAPE_MIN, LOG_SHAPE_MAX)]
}

fn beta_quantiles(point: [f64; 2]) -> Option<[f64; 2]> {
    let (alpha, beta) = (point[0].exp(), point[1].exp());
    let quantiles = if alpha + beta > EXPANSION_CONCENTRATION {
        expanded_quantiles(alpha, beta)
    } else {
        let law = Beta::new(alpha, beta).ok()?;
        [law.inverse_cdf(CI_LOWER_PROBABILITY),
         law.inverse_cdf(CI_UPPER_PROBABILITY)]
    };
    quantiles.iter().all(|q| q.is_finite()).then_some(quantiles)
}

/// Cornish-Fisher quantiles up to the skewness term.
///
/// statrs' incomplete beta continued fraction stops after a fixed number of
/// terms, which is not enough once the shapes are very large. There the law
/// is close to normal and the truncated expansion is accurate to well below
/// the fit tolerance.
fn expanded_quantiles(alpha: f64, beta: f64) -> [f64; 2] {
    let total = alpha + beta;
    let mean = alpha / total;
    let std_dev = (alpha * beta / (total + 1.0)).sqrt() / total;
    let skewness = 2.0 * (beta - alpha) * (total + 1.0).sqrt() / ((total + 2.0) * (alpha * beta).sqrt());
    let skew_shift = skewness * (Z_95 * Z_95 - 1.0) / 6.0;

    [mean + std_dev * (-Z_95 + skew_shift), mean + std_dev * (Z_95 + skew_shift)]
}

fn beta_residual(point: [f64; 2], target: [f64; 2]) -> Option<[f64; 2]> {
    let [q_low, q_high] = beta_quantiles(point)?;
    Some([q_low - target[0], q_high - target[1]])
}

fn newton_step(point: [f64; 2], residual: [f64; 2]) -> Option<[f64; 2]> {
    let mut jacobian = [[0.0; 2]; 2];
    for column in 0..2 {
        let mut forward = point;
        let mut backward = point;
        forward[column] += JACOBIAN_STEP;
        backward[column] -= JACOBIAN_STEP;

        let up = beta_quantiles(forward)?;
        let down = beta_quantiles(backward)?;
        for row in 0..2 {
            jacobian[row][column] = (up[row] - down[row]) / (2.0 * JACOBIAN_STEP);
        }
    }

    let [[a, b], [c, d]] = jacobian;
    let determinant = a * d - b * c;
    if !determinant.is_finite() || determinant.abs() < f64::EPSILON {
        return None;
    }

    let [r_low, r_high] = residual;
    let step = [-(d * r_low - b * r_high) / determinant,
                -(a * r_high - c * r_low) / determinant];

    let largest = step[0].abs().max(step[1].abs());
    let shrink = if largest > MAX_LOG_STEP { MAX_LOG_STEP / largest } else { 1.0 };
    Some([step[0] * shrink, step[1] * shrink])
}

fn line_search(point: [f64; 2],
               residual: [f64; 2],
               step: [f64; 2],
               target: [f64; 2])
               -> Option<([f64; 2], [f64; 2])> {
    let current = norm_sq(residual);
    let mut scale = 1.0;

    while scale >= MIN_STEP_SCALE {
        let candidate = [(point[0] + scale * step[0]).clamp(LOG_SHAPE_MIN, LOG_SHAPE_MAX),
                         (point[1] + scale * step[1]).clamp(LOG_SHAPE_MIN, LOG_SHAPE_MAX)];
        if let Some(next) = beta_residual(candidate, target)
           && norm_sq(next) < current
        {
            return Some((candidate, next));
        }
        scale *= 0.5;
    }

    None
}

fn max_abs(residual: [f64; 2]) -> f64 {
    residual[0].abs().max(residual[1].abs())
}

fn norm_sq(residual: [f64; 2]) -> f64 {
    residual[0] * residual[0] + residual[1] * residual[1]
}
