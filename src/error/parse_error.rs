use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A number literal was malformed, or empty.
    #[error("Invalid number format: '{literal}'.")]
    InvalidNumber {
        /// The offending literal text.
        literal: String,
    },
    /// A character that starts no token.
    #[error("Invalid character in expression: '{character}'.")]
    UnexpectedCharacter {
        /// The character (or character run) that was rejected.
        character: String,
    },
    /// Found an unexpected token while parsing.
    #[error("Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen,
    /// Found extra tokens after parsing should have completed.
    #[error("Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
    },
    /// The left-hand side of an assignment is not a valid identifier.
    #[error("Invalid variable name '{name}'.")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
    },
    /// An assignment had nothing before its `=`.
    #[error("Missing variable name before '='.")]
    MissingIdentifier,
    /// An assignment had nothing after its `=`, or an expression was empty.
    #[error("Missing expression.")]
    MissingExpression,
    /// A second `=` appeared in the expression part of a line.
    #[error("'=' is not allowed inside an expression.")]
    UnexpectedEquals,
    /// A distribution call such as `normal(a, b)` did not carry two numeric
    /// literal arguments.
    #[error("{family}(...) expects two numeric arguments, e.g. {family}(10, 2).")]
    InvalidDistributionCall {
        /// The family keyword that opened the call.
        family: String,
    },
    /// Something that looks like a function call on a non-distribution name.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The called name.
        name: String,
    },
}

impl ParseError {
    /// Returns the coarse classification of this error.
    ///
    /// # Example
    /// ```
    /// use fermi::{ErrorKind, error::ParseError};
    ///
    /// let e = ParseError::InvalidNumber { literal: "1.2.3".into() };
    /// assert_eq!(e.kind(), ErrorKind::NumberFormat);
    /// assert_eq!(ParseError::MissingExpression.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNumber { .. } => ErrorKind::NumberFormat,
            _ => ErrorKind::Syntax,
        }
    }
}
