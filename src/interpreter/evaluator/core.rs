use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    config::EngineConfig,
    distribution::{DistributionSpec, Sampler},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context of one model.
///
/// The context owns the symbol table and the sampler. Statements are
/// executed strictly in source order: a name is visible to every later
/// statement once an assignment has bound it, and a failed assignment leaves
/// it unbound.
///
/// ## Usage
///
/// `Context` is created once per model and reused for every line. Separate
/// models must use separate contexts.
#[derive(Debug, Clone)]
pub struct Context {
    /// Variables bound by successful assignments.
    pub variables: HashMap<String, Value>,
    sampler:       Sampler,
}

impl Context {
    /// Creates a new evaluation context with an empty symbol table.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { variables: HashMap::new(),
               sampler:   Sampler::new(config), }
    }

    /// The configuration used for sampling and fitting.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        self.sampler.config()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Variables are looked up in the symbol table. Distribution literals draw
    /// a fresh anonymous sample array that lives only as long as this
    /// expression; it is never written to the symbol table.
    ///
    /// # Example
    /// ```
    /// use fermi::{
    ///     EngineConfig, Value,
    ///     interpreter::{
    ///         evaluator::core::Context, lexer::tokenize, parser::core::parse_tokens,
    ///     },
    /// };
    ///
    /// let mut context = Context::new(EngineConfig::seeded(3).with_samples(500));
    /// context.variables.insert("x".into(), Value::Scalar(4.0));
    ///
    /// let expr = parse_tokens(&tokenize("x * 2 ^ 3").unwrap()).unwrap();
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Scalar(32.0));
    ///
    /// let expr = parse_tokens(&tokenize("x * 1 2").unwrap()).unwrap();
    /// assert_eq!(context.eval(&expr).unwrap().len(), Some(500));
    /// assert_eq!(context.variables.len(), 1);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::Scalar(*value)),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::Distribution { spec } => self.eval_distribution(spec),
            Expr::UnaryOp { op, expr } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    fn eval_distribution(&mut self, spec: &DistributionSpec) -> EvalResult<Value> {
        let draws = self.sampler.sample(spec)?;
        trace!(%spec, "substituted anonymous samples");
        Ok(Value::from(draws))
    }

    /// Executes a single statement.
    ///
    /// Comments and empty lines produce no value. An assignment evaluates its
    /// right-hand side and binds the name, silently replacing an earlier
    /// binding. A bare expression is evaluated without binding anything.
    ///
    /// # Returns
    /// `Some(Value)` for assignments and expressions, `None` otherwise.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Comment { .. } | Statement::Empty => Ok(None),
            Statement::Assignment { name, expr, .. } => {
                let value = self.eval(expr)?;
                self.variables.insert(name.clone(), value.clone());
                Ok(Some(value))
            },
            Statement::Expression { expr, .. } => self.eval(expr).map(Some),
        }
    }
}
