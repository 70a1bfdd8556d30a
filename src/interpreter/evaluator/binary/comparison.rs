use crate::{
    ast::LogicalOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::RuntimeValue,
    },
};

impl Context {
    /// Evaluates a comparison of the form `RuntimeValue <Operator>
    /// RuntimeValue`.
    ///
    /// All six operators are defined between two Numbers. Two Strings
    /// support `==` and `!=` only. Every other combination is a type error,
    /// including equality between values of different types.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// An `EvalResult<RuntimeValue>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use laika::{
    ///     ast::LogicalOperator,
    ///     interpreter::{evaluator::core::Context, value::core::RuntimeValue},
    /// };
    ///
    /// let a = RuntimeValue::Number(3.0);
    /// let b = RuntimeValue::Number(5.0);
    ///
    /// let result = Context::eval_comparison(LogicalOperator::Less, &a, &b);
    /// assert_eq!(result.unwrap(), RuntimeValue::Boolean(true));
    ///
    /// let s = RuntimeValue::String("x".into());
    /// assert!(Context::eval_comparison(LogicalOperator::Less, &s, &s).is_err());
    /// ```
    pub fn eval_comparison(op: LogicalOperator,
                           left: &RuntimeValue,
                           right: &RuntimeValue)
                           -> EvalResult<RuntimeValue> {
        use LogicalOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match (left, right) {
            (RuntimeValue::Number(l), RuntimeValue::Number(r)) => match op {
                Greater => l > r,
                GreaterEqual => l >= r,
                Less => l < r,
                LessEqual => l <= r,
                Equal => l == r,
                NotEqual => l != r,
                _ => return Err(Self::comparison_error(op, left, right)),
            },
            (RuntimeValue::String(l), RuntimeValue::String(r)) => match op {
                Equal => l == r,
                NotEqual => l != r,
                _ => return Err(Self::comparison_error(op, left, right)),
            },
            _ => return Err(Self::comparison_error(op, left, right)),
        };

        Ok(RuntimeValue::Boolean(result))
    }

    fn comparison_error(op: LogicalOperator, left: &RuntimeValue, right: &RuntimeValue) -> RuntimeError {
        RuntimeError::TypeError { details: format!("cannot compare {} and {} with '{op}'",
                                                   left.type_name(),
                                                   right.type_name()) }
    }
}
