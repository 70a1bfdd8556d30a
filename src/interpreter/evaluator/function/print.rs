use crate::interpreter::{
    environment::Environment,
    evaluator::core::EvalResult,
    value::core::RuntimeValue,
};

/// Prints the arguments to standard output on one line and returns Null.
///
/// Accepts any number of arguments. Their display forms are joined with
/// single spaces; see [`format_line`].
///
/// # Example
/// ```
/// use laika::interpreter::{
///     environment::Environment, evaluator::function::print::println, value::core::RuntimeValue,
/// };
///
/// // The function prints to stdout, but the doctest
/// // only checks the returned result.
/// let env = Environment::global();
/// let result = println(&[RuntimeValue::Number(42.0)], &env).unwrap();
///
/// assert_eq!(result, RuntimeValue::Null);
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn println(args: &[RuntimeValue], _env: &Environment) -> EvalResult<RuntimeValue> {
    println!("{}", format_line(args));
    Ok(RuntimeValue::Null)
}

/// Joins the display forms of `args` with single spaces.
///
/// # Example
/// ```
/// use laika::interpreter::{evaluator::function::print::format_line, value::core::RuntimeValue};
///
/// let args = [RuntimeValue::String("x =".into()), RuntimeValue::Number(3.0), RuntimeValue::Null];
/// assert_eq!(format_line(&args), "x = 3 ");
/// ```
#[must_use]
pub fn format_line(args: &[RuntimeValue]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
