use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, operator::Function},
};

/// Natural logarithm, called as `log`.
///
/// # Example
/// ```
/// use shunt::interpreter::evaluator::function::log::log;
///
/// assert_eq!(log(1.0).unwrap(), 0.0);
/// assert_eq!(log(0.0).unwrap_err().to_string(), "log of non-positive number");
/// ```
pub fn log(x: f64) -> EvalResult<f64> {
    natural_log(Function::Log, x)
}

/// Natural logarithm, called as `ln`. Identical to [`log`] apart from the
/// name in its error message.
pub fn ln(x: f64) -> EvalResult<f64> {
    natural_log(Function::Ln, x)
}

/// Computes `ln(x)` for positive `x`, naming `function` when `x <= 0`.
fn natural_log(function: Function, x: f64) -> EvalResult<f64> {
    if x <= 0.0 {
        return Err(EvalError::LogOfNonPositive { function });
    }
    Ok(x.ln())
}
