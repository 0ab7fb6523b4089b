use crate::interpreter::evaluator::core::EvalResult;

/// Sine of an angle in radians.
///
/// # Example
/// ```
/// use shunt::interpreter::evaluator::function::builtin::sin;
///
/// assert_eq!(sin(0.0).unwrap(), 0.0);
/// ```
pub fn sin(x: f64) -> EvalResult<f64> {
    Ok(x.sin())
}

/// Cosine of an angle in radians.
pub fn cos(x: f64) -> EvalResult<f64> {
    Ok(x.cos())
}

/// Tangent of an angle in radians. Near odd multiples of `pi / 2` the result
/// is very large rather than an error.
pub fn tan(x: f64) -> EvalResult<f64> {
    Ok(x.tan())
}

pub fn abs(x: f64) -> EvalResult<f64> {
    Ok(x.abs())
}
