use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            binary::eval_pow,
            core::{EvalResult, ValueStack},
            function::{builtin, log, sqrt},
        },
        operator::Function,
    },
};

/// Type alias for single-argument builtin handlers.
type BuiltinFn = fn(f64) -> EvalResult<f64>;

/// Defines the single-argument builtins by generating a lookup from
/// [`Function`] to its handler.
///
/// Each entry maps a `Function` variant to a function pointer. The functions
/// after `others:` have no single-argument handler and are dispatched by
/// hand. The generated match is exhaustive, so a new `Function` variant must
/// be listed on one side or the other.
macro_rules! unary_functions {
    (
        $(
            $function:path => $func:expr
        ),* $(,)?
        ; others: $( $other:path ),+ $(,)?
    ) => {
        fn unary_handler(function: Function) -> Option<BuiltinFn> {
            match function {
                $(
                    $function => Some($func as BuiltinFn),
                )*
                $( $other )|+ => None,
            }
        }
    };
}

unary_functions! {
    Function::Sin  => builtin::sin,
    Function::Cos  => builtin::cos,
    Function::Tan  => builtin::tan,
    Function::Abs  => builtin::abs,
    Function::Sqrt => sqrt::sqrt,
    Function::Log  => log::log,
    Function::Ln   => log::ln,
    ; others: Function::Pow,
}

/// Evaluates a function call in postfix order.
///
/// `args` is the number of arguments written in the call. The arguments are
/// the topmost values of `stack`, last argument on top. The call is rejected
/// before any value is consumed when `args` differs from the function's arity
/// or when the stack holds fewer values than needed.
///
/// # Errors
/// - `PowArity` when `pow` does not receive exactly two arguments.
/// - `MissingArgument` when a single-argument function receives none.
/// - `TooManyArguments` when it receives more than one.
/// - Any domain error of the called function.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     evaluator::{core::ValueStack, function::core::eval_call},
///     operator::Function,
/// };
///
/// let mut stack = ValueStack::default();
/// stack.push(3.0);
/// stack.push(2.0);
/// assert_eq!(eval_call(Function::Pow, 2, &mut stack).unwrap(), 9.0);
/// assert!(stack.is_empty());
/// ```
pub fn eval_call(function: Function, args: usize, stack: &mut ValueStack) -> EvalResult<f64> {
    check_arity(function, args, stack)?;

    match unary_handler(function) {
        Some(handler) => {
            let value = stack.pop().ok_or(EvalError::MissingArgument { function })?;
            handler(value)
        },
        // pow, the only two-argument function
        None => {
            let (base, exponent) = stack.pop_pair().ok_or(EvalError::PowArity)?;
            Ok(eval_pow(base, exponent))
        },
    }
}

/// Checks the written argument count against the function's arity and the
/// values available on the stack.
fn check_arity(function: Function, args: usize, stack: &ValueStack) -> EvalResult<()> {
    let arity = function.arity();

    if function == Function::Pow {
        if args != arity || stack.len() < arity {
            return Err(EvalError::PowArity);
        }
        return Ok(());
    }

    match args {
        0 => Err(EvalError::MissingArgument { function }),
        1 if stack.is_empty() => Err(EvalError::MissingArgument { function }),
        1 => Ok(()),
        _ => Err(EvalError::TooManyArguments { function }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[f64]) -> ValueStack {
        let mut stack = ValueStack::default();
        for value in values {
            stack.push(*value);
        }
        stack
    }

    #[test]
    fn pow_with_one_argument_is_rejected_even_with_spare_values() {
        let mut stack = stack_of(&[1.0, 2.0]);
        assert_eq!(eval_call(Function::Pow, 1, &mut stack), Err(EvalError::PowArity));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn pow_without_enough_values_is_rejected() {
        let mut stack = stack_of(&[2.0]);
        assert_eq!(eval_call(Function::Pow, 2, &mut stack), Err(EvalError::PowArity));
    }

    #[test]
    fn unary_function_without_argument() {
        let mut stack = stack_of(&[]);
        let err = eval_call(Function::Sin, 1, &mut stack).unwrap_err();
        assert_eq!(err.to_string(), "missing argument for sin");

        let mut stack = stack_of(&[4.0]);
        assert_eq!(eval_call(Function::Abs, 0, &mut stack),
                   Err(EvalError::MissingArgument { function: Function::Abs }));
    }

    #[test]
    fn unary_function_with_extra_arguments() {
        let mut stack = stack_of(&[1.0, 2.0]);
        let err = eval_call(Function::Cos, 2, &mut stack).unwrap_err();
        assert_eq!(err.to_string(), "cos takes 1 argument");
    }

    #[test]
    fn calls_consume_exactly_their_arguments() {
        let mut stack = stack_of(&[7.0, 16.0]);
        assert_eq!(eval_call(Function::Sqrt, 1, &mut stack), Ok(4.0));
        assert_eq!(stack.len(), 1);

        let mut stack = stack_of(&[7.0, 2.0, 3.0]);
        assert_eq!(eval_call(Function::Pow, 2, &mut stack), Ok(8.0));
        assert_eq!(stack.pop(), Some(7.0));
    }

    #[test]
    fn every_single_argument_function_has_a_handler() {
        for function in [Function::Sin,
                         Function::Cos,
                         Function::Tan,
                         Function::Sqrt,
                         Function::Log,
                         Function::Ln,
                         Function::Abs]
        {
            assert!(unary_handler(function).is_some(), "{function}");
        }
        assert!(unary_handler(Function::Pow).is_none());
    }
}
