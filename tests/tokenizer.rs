use fermi::{
    distribution::{DistributionSpec, Family},
    error::{ErrorKind, ParseError},
    interpreter::lexer::{Token, tokenize},
};

fn interval(family: Family, low: f64, high: f64) -> Token {
    Token::Distribution(DistributionSpec::Interval { family, low, high })
}

fn explicit(family: Family, first: f64, second: f64) -> Token {
    Token::Distribution(DistributionSpec::Explicit { family, first, second })
}

#[test]
fn operators_and_names() {
    assert_eq!(tokenize("households * (share + 2)").unwrap(),
               vec![Token::Identifier("households".into()),
                    Token::Star,
                    Token::LParen,
                    Token::Identifier("share".into()),
                    Token::Plus,
                    Token::Number(2.0),
                    Token::RParen]);
    assert_eq!(tokenize("a / b ^ c - d % 3").unwrap(),
               vec![Token::Identifier("a".into()),
                    Token::Slash,
                    Token::Identifier("b".into()),
                    Token::Caret,
                    Token::Identifier("c".into()),
                    Token::Minus,
                    Token::Identifier("d".into()),
                    Token::Percent,
                    Token::Number(3.0)]);
}

#[test]
fn suffixed_literals_are_scaled() {
    assert_eq!(tokenize("2.7M").unwrap(), vec![Token::Number(2_700_000.0)]);
    assert_eq!(tokenize("15%").unwrap(), vec![Token::Number(0.15)]);
    assert_eq!(tokenize("10 % 3").unwrap(),
               vec![Token::Number(10.0), Token::Percent, Token::Number(3.0)]);
}

#[test]
fn adjacent_numbers_collapse_into_ranges() {
    assert_eq!(tokenize("50 100").unwrap(),
               vec![interval(Family::Uniform, 50.0, 100.0)]);
    assert_eq!(tokenize("10K 50K lognormal").unwrap(),
               vec![interval(Family::LogNormal, 10_000.0, 50_000.0)]);
    assert_eq!(tokenize("0.2 0.6 beta * 3").unwrap(),
               vec![interval(Family::Beta, 0.2, 0.6), Token::Star, Token::Number(3.0)]);
    assert_eq!(tokenize("5% 10% normal").unwrap(),
               vec![interval(Family::Normal, 0.05, 0.1)]);
}

#[test]
fn ranges_inside_expressions() {
    assert_eq!(tokenize("x * 1 2 / (3 4)").unwrap(),
               vec![Token::Identifier("x".into()),
                    Token::Star,
                    interval(Family::Uniform, 1.0, 2.0),
                    Token::Slash,
                    Token::LParen,
                    interval(Family::Uniform, 3.0, 4.0),
                    Token::RParen]);
}

#[test]
fn leading_sign_folds_into_lower_bound() {
    assert_eq!(tokenize("-5 10").unwrap(), vec![interval(Family::Uniform, -5.0, 10.0)]);
    assert_eq!(tokenize("2 * -1 1 normal").unwrap(),
               vec![Token::Number(2.0), Token::Star, interval(Family::Normal, -1.0, 1.0)]);
    assert_eq!(tokenize("3 - 1 2").unwrap(),
               vec![Token::Number(3.0), Token::Minus, interval(Family::Uniform, 1.0, 2.0)]);
}

#[test]
fn operator_between_numbers_prevents_collapse() {
    assert_eq!(tokenize("5 - 10").unwrap(),
               vec![Token::Number(5.0), Token::Minus, Token::Number(10.0)]);
    assert_eq!(tokenize("5 * 10").unwrap(),
               vec![Token::Number(5.0), Token::Star, Token::Number(10.0)]);
}

#[test]
fn unknown_word_after_range_is_left_alone() {
    assert_eq!(tokenize("1 2 tuners").unwrap(),
               vec![interval(Family::Uniform, 1.0, 2.0), Token::Identifier("tuners".into())]);
}

#[test]
fn explicit_distribution_calls() {
    assert_eq!(tokenize("normal(100, 15)").unwrap(),
               vec![explicit(Family::Normal, 100.0, 15.0)]);
    assert_eq!(tokenize("beta(2, 5) * 10").unwrap(),
               vec![explicit(Family::Beta, 2.0, 5.0), Token::Star, Token::Number(10.0)]);
    assert_eq!(tokenize("uniform(-1, 1)").unwrap(),
               vec![explicit(Family::Uniform, -1.0, 1.0)]);
    assert_eq!(tokenize("lognormal(1K, 0.5)").unwrap(),
               vec![explicit(Family::LogNormal, 1_000.0, 0.5)]);
}

#[test]
fn malformed_distribution_calls() {
    for source in ["normal(1)", "beta(x, 2)", "normal(1, 2, 3)", "lognormal(1, 2"] {
        assert!(matches!(tokenize(source),
                         Err(ParseError::InvalidDistributionCall { .. })),
                "{source:?} should be rejected");
    }
}

#[test]
fn lexical_errors() {
    let error = tokenize("3 $ 4").unwrap_err();
    assert_eq!(error, ParseError::UnexpectedCharacter { character: "$".into() });
    assert_eq!(error.kind(), ErrorKind::Syntax);

    let error = tokenize("1.2.3 + 1").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NumberFormat);
}
