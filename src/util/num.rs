use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Results with a smaller magnitude are reported as exactly zero.
pub const ZERO_THRESHOLD: f64 = 1e-12;
/// Number of significant decimal digits kept in a reported result.
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Rounds a raw evaluation result for presentation.
///
/// Values with a magnitude below [`ZERO_THRESHOLD`] become `0`; all others
/// are rounded to [`SIGNIFICANT_DIGITS`] significant digits, which hides
/// floating-point noise such as `0.1 + 0.2 = 0.30000000000000004`.
///
/// ## Errors
/// Returns `NotFinite` for infinities and `NaN`.
///
/// ## Example
/// ```
/// use shunt::util::num::normalize;
///
/// assert_eq!(normalize(0.1 + 0.2).unwrap(), 0.3);
/// assert_eq!(normalize(1.2e-16).unwrap(), 0.0);
/// assert!(normalize(f64::INFINITY).is_err());
/// ```
pub fn normalize(value: f64) -> EvalResult<f64> {
    if !value.is_finite() {
        return Err(EvalError::NotFinite);
    }
    if value.abs() < ZERO_THRESHOLD {
        return Ok(0.0);
    }
    Ok(round_significant(value, SIGNIFICANT_DIGITS))
}

/// Rounds `value` to `digits` significant decimal digits.
///
/// Goes through the shortest scientific representation, so the result is the
/// `f64` closest to the rounded decimal, with no drift from scaling by powers
/// of ten. `digits` of zero is treated as one.
///
/// ## Example
/// ```
/// use shunt::util::num::round_significant;
///
/// assert_eq!(round_significant(123_456.0, 2), 120_000.0);
/// assert_eq!(round_significant(-0.000_123_456, 3), -0.000_123);
/// ```
#[must_use]
pub fn round_significant(value: f64, digits: usize) -> f64 {
    let precision = digits.max(1) - 1;
    format!("{value:.precision$e}").parse().unwrap_or(value)
}
