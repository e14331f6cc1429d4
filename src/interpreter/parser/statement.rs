use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::core::{ParseResult, parse_tokens},
    },
};

/// Parses a single source line.
///
/// A line is one of:
/// - empty (blank or whitespace only),
/// - a comment, when its first non-space character is `#`,
/// - an assignment `name = expression`, split at the first `=` outside
///   parentheses,
/// - a bare expression otherwise.
///
/// Everything after an inline `#` is a trailing comment: it is kept on the
/// statement for display but never evaluated.
///
/// # Errors
/// - `ParseError::MissingIdentifier` / `InvalidIdentifier` for a bad
///   left-hand side.
/// - `ParseError::MissingExpression` for nothing after `=`.
/// - `ParseError::UnexpectedEquals` for a second `=`.
/// - Any tokenizer or expression error from the right-hand side.
///
/// # Example
/// ```
/// use fermi::{ast::Statement, interpreter::parser::statement::parse_line};
///
/// assert_eq!(parse_line("   ").unwrap(), Statement::Empty);
/// assert_eq!(parse_line("# piano tuners").unwrap(),
///            Statement::Comment { text: " piano tuners".into() });
///
/// let Statement::Assignment { name, comment, .. } = parse_line("x = 10  # ten").unwrap() else {
///     panic!("expected an assignment");
/// };
/// assert_eq!(name, "x");
/// assert_eq!(comment.as_deref(), Some("ten"));
///
/// assert!(parse_line("123abc = 10").is_err());
/// assert!(parse_line("x = y == 10").is_err());
/// ```
pub fn parse_line(line: &str) -> ParseResult<Statement> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Statement::Empty);
    }
    if let Some(text) = trimmed.strip_prefix('#') {
        return Ok(Statement::Comment { text: text.to_string() });
    }

    let (code, comment) = match trimmed.split_once('#') {
        Some((code, comment)) => {
            let comment = comment.trim();
            (code, (!comment.is_empty()).then(|| comment.to_string()))
        },
        None => (trimmed, None),
    };

    let Some((name, expr)) = split_assignment(code) else {
        let expr = parse_tokens(&tokenize(code)?)?;
        return Ok(Statement::Expression { expr, comment });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::MissingIdentifier);
    }
    if !is_identifier(name) {
        return Err(ParseError::InvalidIdentifier { name: name.to_string() });
    }

    let expr = expr.trim();
    if expr.is_empty() {
        return Err(ParseError::MissingExpression);
    }
    if expr.contains('=') {
        return Err(ParseError::UnexpectedEquals);
    }

    Ok(Statement::Assignment { name: name.to_string(),
                               expr: parse_tokens(&tokenize(expr)?)?,
                               comment })
}

/// Splits `code` at its first `=` that is not inside parentheses.
fn split_assignment(code: &str) -> Option<(&str, &str)> {
    let mut depth = 0_i32;
    for (at, c) in code.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '=' if depth == 0 => return Some((&code[..at], &code[at + 1..])),
            _ => {},
        }
    }
    None
}

/// Returns `true` for ASCII letters, digits and underscores not starting
/// with a digit.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next()
         .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
