/// Resolution of a written distribution into concrete law parameters.
///
/// Confidence-interval pairs are fitted here: in closed form for the normal
/// and log-normal families, numerically for beta.
pub mod fit;
/// Drawing sample arrays from resolved laws.
pub mod sampler;

pub use fit::Law;
pub use sampler::Sampler;

/// Probability below the lower bound of a confidence-interval pair.
pub const CI_LOWER_PROBABILITY: f64 = 0.05;
/// Probability below the upper bound of a confidence-interval pair.
pub const CI_UPPER_PROBABILITY: f64 = 0.95;

/// The distribution families an uncertain literal can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Flat between two bounds. The default for a bare `low high` pair.
    Uniform,
    /// Gaussian.
    Normal,
    /// Log-normal; its logarithm is Gaussian.
    LogNormal,
    /// Beta, supported on `(0, 1)`.
    Beta,
}

impl Family {
    /// Maps a keyword to its family.
    ///
    /// # Example
    /// ```
    /// use fermi::distribution::Family;
    ///
    /// assert_eq!(Family::from_keyword("lognormal"), Some(Family::LogNormal));
    /// assert_eq!(Family::from_keyword("gamma"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "uniform" => Some(Self::Uniform),
            "normal" => Some(Self::Normal),
            "lognormal" => Some(Self::LogNormal),
            "beta" => Some(Self::Beta),
            _ => None,
        }
    }

    /// The keyword spelling of this family.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Normal => "normal",
            Self::LogNormal => "lognormal",
            Self::Beta => "beta",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// How an uncertain quantity was written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionSpec {
    /// Two adjacent numbers, optionally followed by a family keyword:
    /// `low high [family]`.
    ///
    /// For `Uniform` the pair is the support `[low, high]`. For every other
    /// family it is a 90% confidence interval: `low` is the 5th percentile and
    /// `high` the 95th.
    Interval {
        /// The law the interval describes.
        family: Family,
        /// Lower bound (or 5th percentile).
        low:    f64,
        /// Upper bound (or 95th percentile).
        high:   f64,
    },
    /// A call form `family(first, second)` carrying the law's own
    /// parameters:
    /// - `uniform(min, max)`
    /// - `normal(mean, std_dev)`
    /// - `lognormal(median, shape)`, where `shape` is the standard deviation
    ///   of the underlying normal
    /// - `beta(alpha, beta)`
    Explicit {
        /// The law being parameterised.
        family: Family,
        /// First parameter.
        first:  f64,
        /// Second parameter.
        second: f64,
    },
}

impl DistributionSpec {
    /// Family of the law this specification describes.
    #[must_use]
    pub const fn family(&self) -> Family {
        match self {
            Self::Interval { family, .. } | Self::Explicit { family, .. } => *family,
        }
    }
}

impl std::fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interval { family: Family::Uniform,
                             low,
                             high, } => write!(f, "{low} {high}"),
            Self::Interval { family, low, high } => write!(f, "{low} {high} {family}"),
            Self::Explicit { family,
                             first,
                             second, } => write!(f, "{family}({first}, {second})"),
        }
    }
}
