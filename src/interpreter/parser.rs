/// Core expression parsing.
///
/// Holds the expression entry point and the check that a whole token slice
/// was consumed.
pub mod core;

/// Unary and primary parsing.
///
/// Parses prefix signs, literals, variables, distribution literals and
/// parenthesised sub-expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements one function per precedence level, each left-associative.
pub mod binary;

/// Statement parsing.
///
/// Splits one source line into a comment, an empty line, an assignment or a
/// bare expression.
pub mod statement;
