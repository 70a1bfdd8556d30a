use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult},
        value::core::RuntimeValue,
    },
};

impl Context {
    /// Evaluates a unary operation.
    ///
    /// Supported operators:
    /// - `Not`: negated truthiness of the operand.
    /// - `Increment` / `Decrement`: add or subtract one, in place. The
    ///   operand must be an identifier or a member expression holding a
    ///   Number; the binding or property is updated and the new number is
    ///   returned.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `operand`: The operand expression, unevaluated.
    /// - `env`: Scope used to resolve the operand.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use laika::{run_source, Outcome, interpreter::value::core::RuntimeValue};
    ///
    /// let result = run_source("mut n = 1; ++n; ++n").unwrap();
    /// assert_eq!(result, Outcome::Value(RuntimeValue::Number(3.0)));
    ///
    /// let result = run_source("!0").unwrap();
    /// assert_eq!(result, Outcome::Value(RuntimeValue::Boolean(true)));
    /// ```
    pub fn eval_unary(&mut self,
                      op: UnaryOperator,
                      operand: &Expr,
                      env: &Env)
                      -> EvalResult<RuntimeValue> {
        let delta = match op {
            UnaryOperator::Not => {
                let value = self.eval(operand, env)?;
                return Ok(RuntimeValue::Boolean(!value.is_truthy()?));
            },
            UnaryOperator::Increment => 1.0,
            UnaryOperator::Decrement => -1.0,
        };

        match operand {
            Expr::Identifier(name) => env.update_number(name, delta),
            Expr::Member { object,
                           property,
                           computed, } => {
                let (target, key) = self.member_target(object, property, *computed, env)?;
                let mut properties = target.borrow_mut();

                match properties.get_mut(&key) {
                    Some(RuntimeValue::Number(n)) => {
                        *n += delta;
                        Ok(RuntimeValue::Number(*n))
                    },
                    other => {
                        let type_name = other.map_or("null", |value| value.type_name());
                        Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to \
                                                                        property '{key}' of type \
                                                                        {type_name}") })
                    },
                }
            },
            other => {
                Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {}",
                                                               other.kind()) })
            },
        }
    }
}
