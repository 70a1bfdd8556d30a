use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::RuntimeValue,
    },
};

impl Context {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Both operands must be Numbers. Any other pairing yields Null instead
    /// of an error, so `1 + "a"` is Null. Division by exactly zero is the
    /// one hard failure; `%` by zero follows IEEE rules and yields NaN.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<RuntimeValue>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use laika::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::RuntimeValue},
    /// };
    ///
    /// let left = RuntimeValue::Number(3.0);
    /// let right = RuntimeValue::Number(4.0);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Mul, &left, &right);
    /// assert_eq!(result.unwrap(), RuntimeValue::Number(12.0));
    ///
    /// let text = RuntimeValue::String("a".into());
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &text);
    /// assert_eq!(result.unwrap(), RuntimeValue::Null);
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &RuntimeValue,
                       right: &RuntimeValue)
                       -> EvalResult<RuntimeValue> {
        let (RuntimeValue::Number(l), RuntimeValue::Number(r)) = (left, right) else {
            tracing::debug!(%op,
                            left = left.type_name(),
                            right = right.type_name(),
                            "arithmetic on non-number operands yields null");
            return Ok(RuntimeValue::Null);
        };

        Ok(RuntimeValue::Number(Self::eval_numeric(op, *l, *r)?))
    }

    /// Applies an arithmetic operator to two numbers.
    ///
    /// # Errors
    /// `DivisionByZero` for `/` with a zero divisor.
    pub fn eval_numeric(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
            BinaryOperator::Mod => Ok(left % right),
        }
    }
}
