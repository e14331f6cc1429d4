use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates one arithmetic operation on two finite numbers.
    ///
    /// Division and modulo by zero are rejected. Results that leave the
    /// finite reals are errors rather than values: `NaN` (for example a
    /// negative base raised to a fractional power) is reported as
    /// `NotANumber`, and an infinity as `Overflow`.
    ///
    /// # Example
    /// ```
    /// use fermi::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Pow, 2.0, 10.0).unwrap(), 1024.0);
    /// assert!(Context::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0).is_err());
    /// assert!(Context::eval_scalar_op(BinaryOperator::Pow, -8.0, 0.5).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        let result = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div | Mod if right == 0.0 => return Err(RuntimeError::DivisionByZero),
            Div => left / right,
            Mod => left % right,
            Pow => left.powf(right),
        };

        if result.is_nan() {
            return Err(RuntimeError::NotANumber { details: format!("{left} {op} {right}") });
        }
        if result.is_infinite() {
            return Err(RuntimeError::Overflow { details: format!("{left} {op} {right}") });
        }
        Ok(result)
    }
}
