use logos::Logos;

use crate::{
    distribution::{DistributionSpec, Family},
    error::ParseError,
    interpreter::parser::core::ParseResult,
    util::num::parse_number,
};

/// Raw lexical units produced by `logos` before the range post-pass.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\f\r]+")]
enum RawToken {
    /// Number literals with an optional magnitude suffix or percent sign,
    /// such as `3`, `2.5`, `.5`, `2.7M` or `15%`. Runs of digits and dots
    /// are taken whole so that `2.5.3` is rejected by `parse_number`
    /// instead of splitting into two numbers.
    #[regex(r"([0-9]|\.[0-9])[0-9.]*[kKmMbB%]?", |lex| lex.slice().to_string())]
    Number(String),
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("%")]
    Percent,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
}

/// Represents a lexical token of an expression.
///
/// Adjacent number pairs and explicit `family(a, b)` calls never survive as
/// separate tokens: they are folded into a single `Distribution`.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A scalar literal, already scaled by its suffix.
    Number(f64),
    /// Identifier tokens; variable names such as `population`.
    Identifier(String),
    /// An uncertain literal: `low high [family]` or `family(a, b)`.
    Distribution(DistributionSpec),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `%` standing alone.
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`; only valid inside a distribution call.
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Distribution(spec) => write!(f, "{spec}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::Percent => f.write_str("%"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
        }
    }
}

impl Token {
    /// Whether a `-` following this token (or starting the input, for
    /// `None`) can only be a sign rather than a subtraction.
    const fn expects_operand(previous: Option<&Self>) -> bool {
        matches!(previous,
                 None | Some(Self::Plus
                             | Self::Minus
                             | Self::Star
                             | Self::Slash
                             | Self::Caret
                             | Self::Percent
                             | Self::LParen
                             | Self::Comma))
    }
}

/// Tokenizes the expression part of a line.
///
/// Runs the raw lexer, then two post-passes:
/// 1. `normal(a, b)`, `lognormal(a, b)`, `beta(a, b)` and `uniform(a, b)`
///    with numeric literal arguments become one explicit distribution token.
/// 2. Two adjacent numbers, optionally followed by a family keyword, become
///    one interval distribution token (uniform when no keyword is given). A
///    leading `-` in operand position is folded into the lower bound. An
///    operator between the numbers prevents the fold: `x + 5 10` is
///    `x + (5 10)` and `5 - 10` stays a subtraction.
///
/// # Errors
/// - `ParseError::UnexpectedCharacter` for characters that start no token.
/// - `ParseError::InvalidNumber` for malformed number literals.
/// - `ParseError::InvalidDistributionCall` when a family keyword is called
///   with anything other than two numeric literals.
///
/// # Example
/// ```
/// use fermi::{
///     distribution::{DistributionSpec, Family},
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("x + 5 10").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Identifier("x".into()),
///                 Token::Plus,
///                 Token::Distribution(DistributionSpec::Interval { family: Family::Uniform,
///                                                                  low:    5.0,
///                                                                  high:   10.0, })]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let raw = lex(source)?;
    let folded = fold_distribution_calls(raw)?;
    Ok(collapse_ranges(&folded))
}

fn lex(source: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(ParseError::UnexpectedCharacter { character: lexer.slice().to_string() });
        };
        tokens.push(match token {
                        RawToken::Number(literal) => Token::Number(parse_number(&literal)?),
                        RawToken::Identifier(name) => Token::Identifier(name),
                        RawToken::Plus => Token::Plus,
                        RawToken::Minus => Token::Minus,
                        RawToken::Star => Token::Star,
                        RawToken::Slash => Token::Slash,
                        RawToken::Caret => Token::Caret,
                        RawToken::Percent => Token::Percent,
                        RawToken::LParen => Token::LParen,
                        RawToken::RParen => Token::RParen,
                        RawToken::Comma => Token::Comma,
                    });
    }

    Ok(tokens)
}

/// Folds `family ( [-]number , [-]number )` into an explicit distribution.
fn fold_distribution_calls(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let family = match &token {
            Token::Identifier(name) if iter.peek() == Some(&Token::LParen) => {
                Family::from_keyword(name)
            },
            _ => None,
        };
        let Some(family) = family else {
            out.push(token);
            continue;
        };

        let invalid = || ParseError::InvalidDistributionCall { family: family.to_string() };
        iter.next(); // consume '('
        let first = signed_number(&mut iter).ok_or_else(invalid)?;
        if iter.next() != Some(Token::Comma) {
            return Err(invalid());
        }
        let second = signed_number(&mut iter).ok_or_else(invalid)?;
        if iter.next() != Some(Token::RParen) {
            return Err(invalid());
        }

        out.push(Token::Distribution(DistributionSpec::Explicit { family,
                                                                  first,
                                                                  second }));
    }

    Ok(out)
}

fn signed_number<I>(iter: &mut std::iter::Peekable<I>) -> Option<f64>
    where I: Iterator<Item = Token>
{
    let negative = iter.next_if_eq(&Token::Minus).is_some();
    match iter.next()? {
        Token::Number(n) if negative => Some(-n),
        Token::Number(n) => Some(n),
        _ => None,
    }
}

/// Collapses adjacent number pairs into interval distributions.
fn collapse_ranges(tokens: &[Token]) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let signed = tokens[i] == Token::Minus
                     && Token::expects_operand(out.last())
                     && matches!((tokens.get(i + 1), tokens.get(i + 2)),
                                 (Some(Token::Number(_)), Some(Token::Number(_))));
        let start = if signed { i + 1 } else { i };

        if let (Some(Token::Number(low)), Some(Token::Number(high))) =
            (tokens.get(start), tokens.get(start + 1))
        {
            let low = if signed { -low } else { *low };
            let keyword = match tokens.get(start + 2) {
                Some(Token::Identifier(name)) => Family::from_keyword(name),
                _ => None,
            };

            let family = keyword.unwrap_or(Family::Uniform);
            out.push(Token::Distribution(DistributionSpec::Interval { family,
                                                                      low,
                                                                      high: *high }));
            i = start + if keyword.is_some() { 3 } else { 2 };
            continue;
        }

        out.push(tokens[i].clone());
        i += 1;
    }

    out
}
