use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix signs `-` (negation) and `+` (no-op). Signs are
/// right-associative, so `--x` is `-(-x)`. Without a sign the function
/// delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token::Minus) => {
            tokens.next();
            let expr = parse_unary(tokens)?;
            Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                               expr: Box::new(expr), })
        },
        Some(Token::Plus) => {
            tokens.next();
            parse_unary(tokens)
        },
        _ => parse_primary(tokens),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are:
/// - number literals
/// - variable references
/// - distribution literals (`5 10`, `0.2 0.6 beta`, `normal(100, 15)`)
/// - parenthesized expressions
///
/// # Errors
/// - `ParseError::ExpectedClosingParen` for an unclosed `(`.
/// - `ParseError::UnknownFunction` for `name(...)` where `name` is not a
///   distribution family.
/// - `ParseError::UnexpectedToken` / `UnexpectedEndOfInput` when no operand
///   is present.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Number(value)) => Ok(Expr::Literal { value: *value }),
        Some(Token::Identifier(name)) => {
            if let Some(Token::LParen) = tokens.peek() {
                return Err(ParseError::UnknownFunction { name: name.clone() });
            }
            Ok(Expr::Variable { name: name.clone() })
        },
        Some(Token::Distribution(spec)) => Ok(Expr::Distribution { spec: *spec }),
        Some(Token::LParen) => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen),
            }
        },
        Some(token) => Err(ParseError::UnexpectedToken { token: token.to_string() }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
