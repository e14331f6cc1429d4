use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// `Negate` flips the sign of a scalar, or of every draw of a sample
    /// array.
    ///
    /// # Example
    /// ```
    /// use fermi::{Value, ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Scalar(5.0)).unwrap();
    /// assert_eq!(v, Value::Scalar(-5.0));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::from(vec![1.0, -2.0])).unwrap();
    /// assert_eq!(v, Value::from(vec![-1.0, 2.0]));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Scalar(v) => Ok(Value::Scalar(-v)),
                Value::Samples(samples) => Ok(samples.iter().map(|v| -v).collect::<Vec<_>>().into()),
            },
        }
    }
}
