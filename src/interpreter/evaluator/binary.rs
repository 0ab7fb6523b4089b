use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, operator::Operator},
};

/// Evaluates a binary arithmetic operation.
///
/// `left` is the operand written first. Division checks for an exactly zero
/// divisor; every other operation follows IEEE-754 semantics, so `^` with a
/// negative base and a fractional exponent yields `NaN`, which the caller
/// rejects during normalization.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::eval_binary, operator::Operator};
///
/// assert_eq!(eval_binary(Operator::Pow, 2.0, 0.5).unwrap(), 2f64.sqrt());
/// assert!(eval_binary(Operator::Div, 1.0, 0.0).is_err());
/// ```
pub fn eval_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    use Operator::{Add, Div, Mul, Pow, Sub};

    Ok(match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            left / right
        },
        Pow => eval_pow(left, right),
    })
}

/// Raises `base` to a real `exponent`.
#[must_use]
pub fn eval_pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_divisor_is_still_zero() {
        assert_eq!(eval_binary(Operator::Div, 3.0, -0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn zero_dividend_is_fine() {
        assert_eq!(eval_binary(Operator::Div, 0.0, 3.0), Ok(0.0));
    }

    #[test]
    fn negative_exponents_give_reciprocals() {
        assert_eq!(eval_binary(Operator::Pow, 2.0, -2.0), Ok(0.25));
    }
}
