use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}

/// Parses a complete token slice into one expression.
///
/// Unlike [`parse_expression`], every token must be consumed: a stray `)` is
/// reported as an unbalanced parenthesis and any other leftover as trailing
/// tokens.
///
/// # Errors
/// - `ParseError::MissingExpression` for an empty slice.
/// - Any error raised while parsing the expression itself.
/// - `ParseError::UnexpectedToken` / `UnexpectedTrailingTokens` for leftovers.
///
/// # Example
/// ```
/// use fermi::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("2 * (3 + 4)").unwrap();
/// let expr = parse_tokens(&tokens).unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
///
/// assert!(parse_tokens(&tokenize("(2 + 3").unwrap()).is_err());
/// assert!(parse_tokens(&tokenize("2 + 3)").unwrap()).is_err());
/// ```
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::MissingExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        None => Ok(expr),
        Some(Token::RParen) => Err(ParseError::UnexpectedToken { token: "')' without matching '('".to_string() }),
        Some(token) => {
            let rest = std::iter::once(token).chain(iter)
                                             .map(ToString::to_string)
                                             .collect::<Vec<_>>()
                                             .join(" ");
            Err(ParseError::UnexpectedTrailingTokens { token: rest })
        },
    }
}
