use crate::{
    ast::{Expr, ForLoop, Statement},
    interpreter::{
        environment::Env,
        evaluator::{
            body::BodyContext,
            core::{Context, EvalResult},
        },
        value::core::{LoopSignal, RuntimeValue},
    },
};

/// What a loop does after one run of its body.
enum Step {
    /// Go on with the next iteration.
    Continue,
    /// Leave the loop and yield Null.
    Exit,
    /// Leave the loop and hand this signal to the enclosing body.
    Propagate(RuntimeValue),
}

impl Context {
    /// Evaluates a `while` loop.
    ///
    /// The condition is checked before every iteration. The body shares the
    /// loop's scope. `break` ends the loop, `pass` skips to the next
    /// condition check, and a `return` leaves the loop uninterpreted.
    ///
    /// # Returns
    /// Null, or the `return` signal raised inside the body.
    ///
    /// # Example
    /// ```
    /// use laika::{run_source, Outcome, interpreter::value::core::RuntimeValue};
    ///
    /// let result = run_source("mut i = 0; while (i < 3) { i = i + 1; } i").unwrap();
    /// assert_eq!(result, Outcome::Value(RuntimeValue::Number(3.0)));
    /// ```
    pub fn eval_while(&mut self,
                      condition: &Expr,
                      body: &[Statement],
                      env: &Env)
                      -> EvalResult<RuntimeValue> {
        while self.eval(condition, env)?.is_truthy()? {
            match self.run_iteration(body, env)? {
                Step::Continue => {},
                Step::Exit => break,
                Step::Propagate(signal) => return Ok(signal),
            }
        }

        Ok(RuntimeValue::Null)
    }

    /// Evaluates a `for` loop.
    ///
    /// The initializer runs once, in the enclosing scope; no child scope is
    /// opened, so a variable it declares stays visible after the loop. A
    /// missing condition is always true. The increment runs after every
    /// iteration that does not end the loop, including iterations cut short
    /// by `pass`.
    ///
    /// # Returns
    /// Null, or the `return` signal raised inside the body.
    pub fn eval_for(&mut self, for_loop: &ForLoop, env: &Env) -> EvalResult<RuntimeValue> {
        if let Some(initializer) = &for_loop.initializer {
            self.eval_statement(initializer, env)?;
        }

        loop {
            if let Some(condition) = &for_loop.condition
               && !self.eval(condition, env)?.is_truthy()?
            {
                break;
            }

            match self.run_iteration(&for_loop.body, env)? {
                Step::Continue => {},
                Step::Exit => break,
                Step::Propagate(signal) => return Ok(signal),
            }

            if let Some(increment) = &for_loop.increment {
                self.eval(increment, env)?;
            }
        }

        Ok(RuntimeValue::Null)
    }

    /// Runs the body once and decides how the loop continues.
    fn run_iteration(&mut self, body: &[Statement], env: &Env) -> EvalResult<Step> {
        match self.execute_body(body, env, BodyContext::Loop)? {
            RuntimeValue::Break(LoopSignal::Break) => {
                tracing::trace!("loop exited by break");
                Ok(Step::Exit)
            },
            RuntimeValue::Break(LoopSignal::Pass) => Ok(Step::Continue),
            signal @ RuntimeValue::Return(_) => Ok(Step::Propagate(signal)),
            _ => Ok(Step::Continue),
        }
    }
}
