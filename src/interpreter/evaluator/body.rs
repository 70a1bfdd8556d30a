use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult},
        value::core::{LoopSignal, RuntimeValue},
    },
};

/// The kind of body a statement list belongs to.
///
/// The kind decides which control-flow signals the body may receive and
/// what it does with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyContext {
    /// The top level of a program.
    Main,
    /// The body of a `while` or `for` loop.
    Loop,
    /// A branch of an `if` statement.
    IfElse,
    /// The body of a user-defined function.
    Function,
}

impl Context {
    /// Executes a statement list and routes control-flow signals.
    ///
    /// Statements run in order. After each one:
    /// - A `break`/`pass` signal stops the body. Loops and branches hand it
    ///   to their caller; anywhere else it is an error.
    /// - A `return` signal stops the body. A function body unwraps it and
    ///   yields the carried value; every other body hands the signal up
    ///   unchanged, so it reaches the enclosing function, or the caller of
    ///   the program at the top level.
    /// - Any other value becomes the body's value so far.
    ///
    /// # Parameters
    /// - `body`: Statements to execute.
    /// - `env`: Scope shared by all of them.
    /// - `context`: The kind of body.
    ///
    /// # Returns
    /// The value of the last statement (Null if the body is empty), or the
    /// signal that ended the body early.
    ///
    /// # Errors
    /// `BreakOutsideLoop` if a `break`/`pass` reaches a function body or the
    /// top level, plus any error raised by the statements.
    pub fn execute_body(&mut self,
                        body: &[Statement],
                        env: &Env,
                        context: BodyContext)
                        -> EvalResult<RuntimeValue> {
        let mut last = RuntimeValue::Null;

        for statement in body {
            let value = self.eval_statement(statement, env)?;

            match value {
                RuntimeValue::Break(signal) => {
                    if matches!(context, BodyContext::Main | BodyContext::Function) {
                        let keyword = match signal {
                            LoopSignal::Break => "break",
                            LoopSignal::Pass => "pass",
                        };
                        return Err(RuntimeError::BreakOutsideLoop { keyword });
                    }
                    tracing::trace!(?signal, ?context, "loop signal leaves body");
                    return Ok(value);
                },
                RuntimeValue::Return(inner) if context == BodyContext::Function => return Ok(*inner),
                RuntimeValue::Return(_) => {
                    tracing::trace!(?context, "return signal leaves body");
                    return Ok(value);
                },
                other => last = other,
            }
        }

        Ok(last)
    }
}
