/// Parsing errors.
///
/// Defines all error types that can occur while lexing a number literal,
/// tokenizing an expression or splitting a line into a statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// names, division by zero, distribution fitting failures and arithmetic
/// results that leave the real numbers.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Coarse classification of every failure a line can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A malformed number literal.
    NumberFormat,
    /// A malformed statement or expression.
    Syntax,
    /// A reference to an unbound variable.
    Name,
    /// A division (or modulo) by a value that is or contains zero.
    DivisionByZero,
    /// Distribution parameters out of domain, or a numeric fit that did not
    /// converge.
    DistributionFit,
    /// Any other operator or type misuse.
    Evaluation,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NumberFormat => "NumberFormatError",
            Self::Syntax => "SyntaxError",
            Self::Name => "NameError",
            Self::DivisionByZero => "DivisionByZeroError",
            Self::DistributionFit => "DistributionFitError",
            Self::Evaluation => "EvaluationError",
        };
        f.write_str(name)
    }
}

/// Any failure raised while executing one line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the coarse classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
