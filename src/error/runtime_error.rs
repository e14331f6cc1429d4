use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    #[error("Undefined variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero. For sample arrays a single zero divisor is
    /// enough to fail the whole operation.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Distribution parameters were out of domain, or a numeric fit did not
    /// converge.
    #[error("Cannot fit distribution: {details}.")]
    DistributionFit {
        /// Details about why the fit failed.
        details: String,
    },
    /// A value had an unexpected or incompatible shape.
    #[error("Type error: {details}.")]
    TypeError {
        /// Details about the mismatch.
        details: String,
    },
    /// Arithmetic overflowed to infinity.
    #[error("Result overflowed while computing {details}.")]
    Overflow {
        /// The operation that overflowed.
        details: String,
    },
    /// Arithmetic left the real numbers, e.g. a negative base raised to a
    /// fractional power.
    #[error("Result is not a real number: {details}.")]
    NotANumber {
        /// The operation that produced the value.
        details: String,
    },
}

impl RuntimeError {
    /// Returns the coarse classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVariable { .. } => ErrorKind::Name,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::DistributionFit { .. } => ErrorKind::DistributionFit,
            Self::TypeError { .. } | Self::Overflow { .. } | Self::NotANumber { .. } => {
                ErrorKind::Evaluation
            },
        }
    }

    /// Shorthand for a `DistributionFit` error.
    pub(crate) fn fit(details: impl Into<String>) -> Self {
        Self::DistributionFit { details: details.into() }
    }
}
