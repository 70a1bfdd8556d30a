use crate::{
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::RuntimeValue},
};

/// Asserts that the argument is truthy.
///
/// Accepts exactly one argument.
/// If the value is falsy, an `AssertionFailed` error is returned.
/// Otherwise the function returns `true`.
///
/// # Returns
/// `RuntimeValue::Boolean(true)` on success.
///
/// # Example
/// ```
/// use laika::interpreter::{
///     environment::Environment, evaluator::function::assert::assert, value::core::RuntimeValue,
/// };
///
/// let env = Environment::global();
/// let r = assert(&[RuntimeValue::Number(1.0)], &env).unwrap();
/// assert_eq!(r, RuntimeValue::Boolean(true));
///
/// assert!(assert(&[RuntimeValue::Null], &env).is_err());
/// ```
pub fn assert(args: &[RuntimeValue], _env: &Environment) -> EvalResult<RuntimeValue> {
    let holds = match args.first() {
        Some(value) => value.is_truthy()?,
        None => false,
    };

    if !holds {
        return Err(RuntimeError::AssertionFailed);
    }
    Ok(RuntimeValue::Boolean(true))
}
