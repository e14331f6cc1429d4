use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies an element-wise binary operation to one or two values.
    ///
    /// This function unifies all array evaluation paths:
    /// - Samples with samples, draw by draw
    /// - Samples with scalar, broadcasting the scalar
    /// - Scalar with samples, broadcasting the scalar
    /// - Scalar with scalar, as a plain scalar operation
    ///
    /// Two sample arrays must have the same length; arrays are never
    /// truncated or partially broadcast. The first failing draw fails the
    /// whole operation.
    ///
    /// # Example
    /// ```
    /// use fermi::{Value, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let left = Value::from(vec![1.0, 2.0]);
    /// let right = Value::from(vec![10.0, 20.0]);
    ///
    /// let r = Context::map_array_binary(BinaryOperator::Add, &left, &right).unwrap();
    /// assert_eq!(r, Value::from(vec![11.0, 22.0]));
    /// ```
    pub fn map_array_binary(op: BinaryOperator,
                            left: &Value,
                            right: &Value)
                            -> EvalResult<Value> {
        let draws = match (left, right) {
            (Value::Samples(l), Value::Samples(r)) => {
                if l.len() != r.len() {
                    return Err(RuntimeError::TypeError { details: format!("Cannot apply {op} to sample arrays of different lengths: {} vs {}",
                                                                          l.len(),
                                                                          r.len()) });
                }
                l.iter()
                 .zip(r.iter())
                 .map(|(a, b)| Self::eval_scalar_op(op, *a, *b))
                 .collect::<EvalResult<Vec<f64>>>()?
            },
            (Value::Samples(l), Value::Scalar(r)) => {
                l.iter()
                 .map(|a| Self::eval_scalar_op(op, *a, *r))
                 .collect::<EvalResult<Vec<f64>>>()?
            },
            (Value::Scalar(l), Value::Samples(r)) => {
                r.iter()
                 .map(|b| Self::eval_scalar_op(op, *l, *b))
                 .collect::<EvalResult<Vec<f64>>>()?
            },
            (Value::Scalar(l), Value::Scalar(r)) => {
                return Self::eval_scalar_op(op, *l, *r).map(Value::Scalar);
            },
        };

        Ok(Value::from(draws))
    }
}
