use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::RuntimeValue},
};

/// Returns the current time in milliseconds since the UNIX epoch.
///
/// # Example
/// ```
/// use laika::interpreter::{
///     environment::Environment, evaluator::function::clock::time, value::core::RuntimeValue,
/// };
///
/// let env = Environment::global();
/// let RuntimeValue::Number(ms) = time(&[], &env).unwrap() else { panic!("expected a number") };
/// assert!(ms > 1.6e12);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn time(_args: &[RuntimeValue], _env: &Environment) -> EvalResult<RuntimeValue> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)
                                   .map_err(|e| RuntimeError::Clock { details: e.to_string() })?;

    Ok(RuntimeValue::Number(elapsed.as_millis() as f64))
}
