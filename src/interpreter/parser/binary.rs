use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_level(tokens,
                |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and a free-standing `%`
/// (modulo).
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_level(tokens,
                |op| {
                    matches!(op,
                             BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
                },
                parse_exponent)
}

/// Parses exponentiation expressions.
///
/// `^` binds tighter than every other binary operator and, like them, is
/// applied left to right: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`. A sign binds tighter
/// still, so `-2 ^ 2` is `(-2) ^ 2`.
///
/// The rule is: `exponent := unary ("^" unary)*`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_level(tokens, |op| matches!(op, BinaryOperator::Pow), parse_unary)
}

/// One left-associative precedence level: `operand (op operand)*` for every
/// operator accepted by `accepts`.
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      accepts: impl Fn(BinaryOperator) -> bool,
                      operand: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use fermi::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
