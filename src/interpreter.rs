/// The evaluator module executes expression trees and computes values.
///
/// The evaluator resolves variables against the symbol table, draws anonymous
/// sample arrays for distribution literals and applies operators element-wise
/// across scalars and sample arrays.
///
/// # Responsibilities
/// - Owns the symbol table of one model.
/// - Broadcasts scalars across sample arrays.
/// - Reports runtime errors such as unbound names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes the expression part of a line.
///
/// Raw tokens come from a `logos` lexer. A post-pass then folds adjacent
/// number pairs and `family(a, b)` calls into single distribution tokens.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Parses number literals through the number lexicon.
/// - Reports lexical errors for invalid characters or malformed literals.
pub mod lexer;
/// The parser module builds statements and expression trees from tokens.
///
/// # Responsibilities
/// - Splits a line into comment, empty, assignment or bare expression.
/// - Parses expressions by precedence: `^`, then `*` `/` `%`, then `+` `-`.
/// - Validates grammar, reporting unbalanced parentheses and stray tokens.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// A value is either a scalar or a fixed-length array of Monte Carlo samples.
pub mod value;
