use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{binary::eval_binary, function::core::eval_call},
        lexer::Token,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Operands waiting to be consumed while a postfix sequence is evaluated.
#[derive(Debug, Default)]
pub struct ValueStack {
    values: Vec<f64>,
}

impl ValueStack {
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Option<f64> {
        self.values.pop()
    }

    /// Pops the two topmost values as `(left, right)`, where `right` is the
    /// one pushed last. Leaves the stack untouched when it holds fewer than
    /// two values.
    pub fn pop_pair(&mut self) -> Option<(f64, f64)> {
        if self.values.len() < 2 {
            return None;
        }
        let right = self.values.pop()?;
        let left = self.values.pop()?;
        Some((left, right))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the only value left on the stack, or `None` if there is not
    /// exactly one.
    fn into_single(mut self) -> Option<f64> {
        if self.values.len() == 1 { self.values.pop() } else { None }
    }
}

/// Evaluates a postfix sequence to a single number.
///
/// Numbers are pushed; operators, the unary minus marker and function calls
/// pop their operands and push their result. The raw result is returned
/// without rounding.
///
/// # Errors
/// - `MissingUnaryOperand` / `InsufficientOperands` when an operator lacks
///   operands.
/// - `DivisionByZero`, `SqrtOfNegative`, `LogOfNonPositive` for values
///   outside an operation's domain.
/// - `PowArity`, `MissingArgument`, `TooManyArguments` for calls with the
///   wrong number of arguments.
/// - `UnknownToken` for parentheses, separators or identifiers, which never
///   appear in a well-formed postfix sequence.
/// - `InvalidExpression` when the sequence does not reduce to one value,
///   including an empty sequence.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::core::eval_postfix, lexer::Token, operator::Operator};
///
/// let postfix = [Token::Number(7.0),
///                Token::Number(2.0),
///                Token::Operator(Operator::Sub),
///                Token::UnaryMinus];
/// assert_eq!(eval_postfix(&postfix).unwrap(), -5.0);
/// ```
pub fn eval_postfix(tokens: &[Token]) -> EvalResult<f64> {
    let mut stack = ValueStack::default();

    for token in tokens {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::UnaryMinus => {
                let value = stack.pop().ok_or(EvalError::MissingUnaryOperand)?;
                stack.push(-value);
            },
            Token::Operator(op) => {
                let (left, right) =
                    stack.pop_pair().ok_or(EvalError::InsufficientOperands { op: *op })?;
                stack.push(eval_binary(*op, left, right)?);
            },
            Token::Call(call) => {
                let value = eval_call(call.function, call.args, &mut stack)?;
                stack.push(value);
            },
            other => return Err(EvalError::UnknownToken { token: other.to_string() }),
        }
    }

    stack.into_single().ok_or(EvalError::InvalidExpression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{
        lexer::Call,
        operator::{Function, Operator},
    };

    #[test]
    fn binary_operands_keep_their_order() {
        let postfix = [Token::Number(10.0), Token::Number(4.0), Token::Operator(Operator::Sub)];
        assert_eq!(eval_postfix(&postfix), Ok(6.0));

        let postfix = [Token::Number(1.0), Token::Number(4.0), Token::Operator(Operator::Div)];
        assert_eq!(eval_postfix(&postfix), Ok(0.25));
    }

    #[test]
    fn empty_sequence_is_invalid() {
        assert_eq!(eval_postfix(&[]), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn leftover_values_are_invalid() {
        let postfix = [Token::Number(1.0), Token::Number(2.0)];
        assert_eq!(eval_postfix(&postfix), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn unary_minus_needs_an_operand() {
        assert_eq!(eval_postfix(&[Token::UnaryMinus]), Err(EvalError::MissingUnaryOperand));
    }

    #[test]
    fn binary_operator_needs_two_operands() {
        let postfix = [Token::Number(2.0), Token::Operator(Operator::Mul)];
        let err = eval_postfix(&postfix).unwrap_err();
        assert_eq!(err, EvalError::InsufficientOperands { op: Operator::Mul });
        assert_eq!(err.to_string(), "insufficient operands for *");
    }

    #[test]
    fn structural_tokens_are_unknown() {
        let postfix = [Token::Number(2.0), Token::LeftParen];
        assert_eq!(eval_postfix(&postfix),
                   Err(EvalError::UnknownToken { token: "(".to_string() }));

        let postfix = [Token::Identifier("x".to_string())];
        assert_eq!(eval_postfix(&postfix),
                   Err(EvalError::UnknownToken { token: "x".to_string() }));
    }

    #[test]
    fn pow_takes_base_then_exponent() {
        let postfix = [Token::Number(2.0),
                       Token::Number(10.0),
                       Token::Call(Call::new(Function::Pow, 2))];
        assert_eq!(eval_postfix(&postfix), Ok(1024.0));
    }
}
