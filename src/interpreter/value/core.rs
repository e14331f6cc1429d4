use std::sync::Arc;

use crate::report::format_result;

/// Represents a runtime value in the interpreter.
///
/// Arithmetic is closed over this union: two scalars combine into a scalar,
/// and anything combined with a sample array yields a sample array of the
/// same length. Sample arrays are shared, so cloning a value never copies
/// its draws.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A deterministic number.
    Scalar(f64),
    /// Monte Carlo draws of an uncertain quantity. Every array produced by
    /// one engine has exactly the configured sample count.
    Samples(Arc<[f64]>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Samples(v.into())
    }
}

impl Value {
    /// Returns the scalar, or `None` for a sample array.
    ///
    /// # Example
    /// ```
    /// use fermi::Value;
    ///
    /// assert_eq!(Value::Scalar(2.5).as_scalar(), Some(2.5));
    /// assert_eq!(Value::from(vec![1.0, 2.0]).as_scalar(), None);
    /// ```
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Samples(_) => None,
        }
    }

    /// Returns the draws, or `None` for a scalar.
    #[must_use]
    pub fn as_samples(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Samples(samples) => Some(samples),
        }
    }

    /// Returns `true` for a sample array.
    #[must_use]
    pub const fn is_samples(&self) -> bool {
        matches!(self, Self::Samples(_))
    }

    /// Number of draws, or `None` for a scalar.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.as_samples().map(<[f64]>::len)
    }

    /// Returns `true` if any scalar or draw equals zero.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        match self {
            Self::Scalar(v) => *v == 0.0,
            Self::Samples(samples) => samples.contains(&0.0),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_result(self))
    }
}
