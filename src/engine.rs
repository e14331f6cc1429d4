use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::{
    ast::Statement,
    config::EngineConfig,
    error::{Error, ErrorKind},
    interpreter::{evaluator::core::Context, parser::statement::parse_line, value::core::Value},
};

/// The outcome of executing one source line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineResult {
    /// A full-line comment; `text` follows the `#`.
    Comment {
        /// The comment body.
        text: String,
    },
    /// A blank line.
    Empty,
    /// A successful assignment. The name is now bound to `value`.
    Assignment {
        /// The bound variable.
        name:    String,
        /// Its new value.
        value:   Value,
        /// Trailing `# comment`, if any.
        comment: Option<String>,
    },
    /// A successfully evaluated bare expression.
    Expression {
        /// The computed value.
        value:   Value,
        /// Trailing `# comment`, if any.
        comment: Option<String>,
    },
    /// The line failed to parse or evaluate.
    Error {
        /// Classification of the failure.
        kind:    ErrorKind,
        /// Human-readable description.
        message: String,
    },
}

impl LineResult {
    /// The value produced by an assignment or expression line.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Assignment { value, .. } | Self::Expression { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns `true` for failed lines.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    fn from_error(error: &Error) -> Self {
        Self::Error { kind:    error.kind(),
                      message: error.to_string(), }
    }
}

/// Evaluates models line by line.
///
/// An engine owns one symbol table and one random source. It is not
/// reentrant; concurrent models need one engine each.
#[derive(Debug, Clone)]
pub struct Engine {
    context: Context,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with the default configuration and a fresh random
    /// seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { context: Context::new(config) }
    }

    /// The configuration this engine samples and fits with.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        self.context.config()
    }

    /// Looks up a bound variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.context.variables.get(name)
    }

    /// All variables bound so far.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, Value> {
        &self.context.variables
    }

    /// Forgets every binding, e.g. before recalculating a model from scratch.
    pub fn clear(&mut self) {
        self.context.variables.clear();
    }

    /// Executes one line against the current symbol table.
    ///
    /// Never fails: parse and evaluation errors are returned as
    /// `LineResult::Error`, and a failed assignment leaves its name unbound.
    ///
    /// # Example
    /// ```
    /// use fermi::{Engine, ErrorKind, LineResult, Value};
    ///
    /// let mut engine = Engine::new();
    /// assert_eq!(engine.execute_line("population = 2.7M"),
    ///            LineResult::Assignment { name:    "population".into(),
    ///                                     value:   Value::Scalar(2_700_000.0),
    ///                                     comment: None, });
    ///
    /// let LineResult::Error { kind, message } = engine.execute_line("y = x * 2") else {
    ///     panic!("expected an error");
    /// };
    /// assert_eq!(kind, ErrorKind::Name);
    /// assert!(message.contains("'x'"));
    /// ```
    pub fn execute_line(&mut self, line: &str) -> LineResult {
        match self.try_execute_line(line) {
            Ok(result) => result,
            Err(error) => {
                debug!(kind = %error.kind(), %error, "line failed");
                LineResult::from_error(&error)
            },
        }
    }

    fn try_execute_line(&mut self, line: &str) -> Result<LineResult, Error> {
        let statement = parse_line(line)?;
        let value = self.context.eval_statement(&statement)?;

        Ok(match (statement, value) {
            (Statement::Comment { text }, _) => LineResult::Comment { text },
            (Statement::Assignment { name, comment, .. }, Some(value)) => {
                debug!(%name, samples = value.is_samples(), "bound variable");
                LineResult::Assignment { name, value, comment }
            },
            (Statement::Expression { comment, .. }, Some(value)) => {
                LineResult::Expression { value, comment }
            },
            _ => LineResult::Empty,
        })
    }

    /// Executes a whole model, one result per line, in input order.
    ///
    /// Lines are split on line breaks (a final trailing newline does not
    /// start another line). A failing line never aborts the lines after it.
    ///
    /// # Example
    /// ```
    /// use fermi::{Engine, Value};
    ///
    /// let mut engine = Engine::new();
    /// let results = engine.execute_model("x = 10\ny = x * 2\n");
    /// assert_eq!(results.len(), 2);
    /// assert_eq!(results[1].value(), Some(&Value::Scalar(20.0)));
    /// assert_eq!(engine.variable("x"), Some(&Value::Scalar(10.0)));
    /// ```
    pub fn execute_model(&mut self, text: &str) -> Vec<LineResult> {
        text.lines()
            .enumerate()
            .map(|(index, line)| {
                let _span = debug_span!("line", number = index + 1).entered();
                self.execute_line(line)
            })
            .collect()
    }
}
