use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Two scalars go straight to `eval_scalar_op`; as soon as either side is
    /// a sample array the operation is applied element-wise by
    /// `map_array_binary`, broadcasting a scalar operand across every draw.
    ///
    /// Division and modulo are checked before any work is done: a divisor
    /// that is zero, or a sample array containing a single zero draw, fails
    /// the whole operation.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use fermi::{
    ///     Value, ast::BinaryOperator, error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let samples = Value::from(vec![1.0, 2.0, 3.0]);
    ///
    /// let scaled = Context::eval_binary(BinaryOperator::Mul, &Value::Scalar(2.0), &samples);
    /// assert_eq!(scaled.unwrap(), Value::from(vec![2.0, 4.0, 6.0]));
    ///
    /// let divisor = Value::from(vec![1.0, 0.0, 3.0]);
    /// let failed = Context::eval_binary(BinaryOperator::Div, &samples, &divisor);
    /// assert_eq!(failed, Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        if matches!(op, BinaryOperator::Div | BinaryOperator::Mod) && right.contains_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        match (left, right) {
            (Value::Scalar(l), Value::Scalar(r)) => Self::eval_scalar_op(op, *l, *r).map(Value::Scalar),
            _ => Self::map_array_binary(op, left, right),
        }
    }
}
