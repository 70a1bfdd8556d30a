use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts an `f64` to an `i32` process exit status if the value is
/// finite, within range, and not fractional.
///
/// # Parameters
/// - `value`: The number returned at the top level of a program.
///
/// # Returns
/// - `Ok(i32)`: The converted status.
/// - `Err(RuntimeError::InvalidExitStatus)`: If the conversion would lose
///   information.
///
/// # Example
/// ```
/// use laika::{error::RuntimeError, util::num::f64_to_exit_status};
///
/// assert_eq!(f64_to_exit_status(3.0).unwrap(), 3);
///
/// let err = f64_to_exit_status(1.5).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidExitStatus { .. }));
///
/// assert!(f64_to_exit_status(1e20).is_err());
/// assert!(f64_to_exit_status(f64::NAN).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_exit_status(value: f64) -> EvalResult<i32> {
    if !value.is_finite()
       || value < f64::from(i32::MIN)
       || value > f64::from(i32::MAX)
       || value.fract() != 0.0
    {
        return Err(RuntimeError::InvalidExitStatus { value });
    }
    Ok(value as i32)
}

/// Formats a number the way it is used as an object key.
///
/// Integral numbers drop their fractional part, so `obj[1]` and `obj["1"]`
/// name the same property.
///
/// # Example
/// ```
/// use laika::util::num::number_key;
///
/// assert_eq!(number_key(1.0), "1");
/// assert_eq!(number_key(2.5), "2.5");
/// ```
#[must_use]
pub fn number_key(value: f64) -> String {
    format!("{value}")
}
