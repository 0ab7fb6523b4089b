use thiserror::Error;

use crate::interpreter::operator::{Function, Operator};

/// Represents all errors that can occur while evaluating a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The unary minus marker found an empty value stack.
    #[error("missing operand for unary minus")]
    MissingUnaryOperand,
    /// A binary operator found fewer than two values.
    #[error("insufficient operands for {op}")]
    InsufficientOperands {
        /// The operator being applied.
        op: Operator,
    },
    /// The right operand of `/` was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// `pow` was called with anything other than two arguments.
    #[error("pow requires 2 arguments")]
    PowArity,
    /// A single-argument function was called without its argument.
    #[error("missing argument for {function}")]
    MissingArgument {
        /// The function being called.
        function: Function,
    },
    /// A single-argument function was called with extra arguments.
    #[error("{function} takes 1 argument")]
    TooManyArguments {
        /// The function being called.
        function: Function,
    },
    /// `sqrt` of a negative number.
    #[error("sqrt of negative number")]
    SqrtOfNegative,
    /// `log` or `ln` of zero or a negative number.
    #[error("{function} of non-positive number")]
    LogOfNonPositive {
        /// Either `log` or `ln`.
        function: Function,
    },
    /// A token that has no meaning in postfix order.
    #[error("unknown token: {token}")]
    UnknownToken {
        /// The token as it would be written.
        token: String,
    },
    /// The sequence did not reduce to exactly one value.
    #[error("invalid expression")]
    InvalidExpression,
    /// The result overflowed or left the real numbers.
    #[error("result is not a finite number")]
    NotFinite,
}
