use crate::{
    ast::LogicalOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::RuntimeValue,
    },
};

impl Context {
    /// Evaluates a logical or comparison operator on two evaluated operands.
    ///
    /// `and` and `or` convert both operands through truthiness. Both sides
    /// have already been evaluated by the time this runs; there is no
    /// short-circuit. The comparison operators are handed to
    /// [`Context::eval_comparison`].
    ///
    /// # Example
    /// ```
    /// use laika::{
    ///     ast::LogicalOperator,
    ///     interpreter::{evaluator::core::Context, value::core::RuntimeValue},
    /// };
    ///
    /// let a = RuntimeValue::Number(1.0);
    /// let b = RuntimeValue::String(String::new());
    ///
    /// let result = Context::eval_logical(LogicalOperator::Or, &a, &b);
    /// assert_eq!(result.unwrap(), RuntimeValue::Boolean(true));
    ///
    /// let result = Context::eval_logical(LogicalOperator::And, &a, &b);
    /// assert_eq!(result.unwrap(), RuntimeValue::Boolean(false));
    /// ```
    pub fn eval_logical(op: LogicalOperator,
                        left: &RuntimeValue,
                        right: &RuntimeValue)
                        -> EvalResult<RuntimeValue> {
        match op {
            LogicalOperator::And => {
                let (l, r) = (left.is_truthy()?, right.is_truthy()?);
                Ok(RuntimeValue::Boolean(l && r))
            },
            LogicalOperator::Or => {
                let (l, r) = (left.is_truthy()?, right.is_truthy()?);
                Ok(RuntimeValue::Boolean(l || r))
            },
            _ => Self::eval_comparison(op, left, right),
        }
    }
}
