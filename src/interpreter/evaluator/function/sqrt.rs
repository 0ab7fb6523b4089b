use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Computes the square root of a non-negative number.
///
/// Negative input is an error; complex results are not supported.
///
/// # Example
/// ```
/// use shunt::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(16.0).unwrap(), 4.0);
/// assert!(sqrt(-1.0).is_err());
/// ```
pub fn sqrt(x: f64) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(EvalError::SqrtOfNegative);
    }
    Ok(x.sqrt())
}
