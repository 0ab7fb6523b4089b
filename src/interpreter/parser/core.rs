use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        operator::{Function, Operator, constant},
        parser::stack::OperatorStack,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Converts an infix token sequence to postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm. Numbers and constants go straight to
/// the output; operators wait on a stack until an operator of lower
/// precedence, a closing parenthesis or the end of input flushes them.
///
/// A `-` is unary when it starts the expression or follows an operator, `(`
/// or `,`; it is emitted as [`Token::UnaryMinus`]. Function calls are emitted
/// after their arguments as [`Token::Call`] with the number of arguments
/// written between the parentheses.
///
/// # Errors
/// - `UnbalancedParentheses` for a `)` without `(` or a `(` never closed.
/// - `MisplacedSeparator` for a `,` outside a call's argument list.
/// - `UnknownIdentifier` for a name that is neither a function nor a
///   constant.
/// - `ExpectedArguments` for a function name not followed by `(`.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     lexer::{Call, Token, tokenize},
///     operator::{Function, Operator},
///     parser::core::to_postfix,
/// };
///
/// let postfix = to_postfix(tokenize("pow(2, 3) * -1").unwrap()).unwrap();
/// assert_eq!(postfix,
///            vec![Token::Number(2.0),
///                 Token::Number(3.0),
///                 Token::Call(Call::new(Function::Pow, 2)),
///                 Token::Number(1.0),
///                 Token::UnaryMinus,
///                 Token::Operator(Operator::Mul)]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut stack = OperatorStack::default();
    let mut tokens = tokens.into_iter().peekable();
    let mut expects_operand = true;
    let mut just_opened = false;
    let mut opens_call = false;

    while let Some(token) = tokens.next() {
        let opened = matches!(token, Token::LeftParen);

        match token {
            Token::Number(_) | Token::Call(..) => {
                stack.emit(token);
                expects_operand = false;
            },
            Token::Identifier(name) => {
                if let Some(function) = Function::from_name(&name) {
                    if tokens.peek() != Some(&Token::LeftParen) {
                        return Err(SyntaxError::ExpectedArguments { name });
                    }
                    stack.push_function(function);
                    opens_call = true;
                } else if let Some(value) = constant(&name) {
                    stack.emit(Token::Number(value));
                    expects_operand = false;
                } else {
                    return Err(SyntaxError::UnknownIdentifier { name });
                }
            },
            Token::Operator(Operator::Sub) | Token::UnaryMinus if expects_operand => {
                stack.push_negate();
            },
            Token::UnaryMinus => stack.push_negate(),
            Token::Operator(op) => {
                stack.push_binary(op);
                expects_operand = true;
            },
            Token::LeftParen => {
                stack.open(opens_call);
                opens_call = false;
                expects_operand = true;
            },
            Token::RightParen => {
                stack.close(just_opened)?;
                expects_operand = false;
            },
            Token::Separator => {
                stack.separate()?;
                expects_operand = true;
            },
            Token::Ignored => {},
        }

        just_opened = opened;
    }

    let postfix = stack.finish()?;
    log::debug!("postfix: {}",
                postfix.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "));
    Ok(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn rpn(source: &str) -> String {
        to_postfix(tokenize(source).unwrap()).unwrap()
                                              .iter()
                                              .map(ToString::to_string)
                                              .collect::<Vec<_>>()
                                              .join(" ")
    }

    fn rpn_err(source: &str) -> SyntaxError {
        to_postfix(tokenize(source).unwrap()).unwrap_err()
    }

    #[test]
    fn precedence_matrix() {
        let cases = [("1 + 2", "1 2 +"),
                     ("2 + 3 * 4", "2 3 4 * +"),
                     ("2 * 3 + 4", "2 3 * 4 +"),
                     ("8 - 4 - 2", "8 4 - 2 -"),
                     ("8 / 4 * 2", "8 4 / 2 *"),
                     ("2 ^ 3 ^ 2", "2 3 2 ^ ^"),
                     ("2 ^ 3 * 4", "2 3 ^ 4 *"),
                     ("4 * 2 ^ 3", "4 2 3 ^ *")];

        for (input, expected) in cases {
            assert_eq!(rpn(input), expected, "input: {input}");
        }
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(rpn("(2 + 3) * 4"), "2 3 + 4 *");
        assert_eq!(rpn("2 * (3 + 4 * (5 - 1))"), "2 3 4 5 1 - * + *");
        assert_eq!(rpn("((7))"), "7");
    }

    #[test]
    fn unary_minus_is_detected_from_context() {
        assert_eq!(rpn("-3"), "3 neg");
        assert_eq!(rpn("3 - -2"), "3 2 neg -");
        assert_eq!(rpn("-(2 + 3)"), "2 3 + neg");
        assert_eq!(rpn("2 * -3"), "2 3 neg *");
        assert_eq!(rpn("pow(2, -1)"), "2 1 neg pow/2");
        assert_eq!(rpn("--4"), "4 neg neg");
    }

    #[test]
    fn unary_minus_binds_tighter_than_binary_operators() {
        assert_eq!(rpn("-2 + 3"), "2 neg 3 +");
        assert_eq!(rpn("-2 ^ 2"), "2 neg 2 ^");
        assert_eq!(rpn("2 ^ -1"), "2 1 neg ^");
    }

    #[test]
    fn functions_follow_their_arguments() {
        assert_eq!(rpn("sqrt(16)"), "16 sqrt/1");
        assert_eq!(rpn("-sqrt(4)"), "4 sqrt/1 neg");
        assert_eq!(rpn("pow(2, 3 + 1)"), "2 3 1 + pow/2");
        assert_eq!(rpn("sin(cos(0))"), "0 cos/1 sin/1");
        assert_eq!(rpn("abs(pow(2, 3) - 10) * 2"), "2 3 pow/2 10 - abs/1 2 *");
    }

    #[test]
    fn call_records_the_written_argument_count() {
        assert_eq!(rpn("pow(2)"), "2 pow/1");
        assert_eq!(rpn("sin()"), "sin/0");
        assert_eq!(rpn("sin(1, 2)"), "1 2 sin/2");
    }

    #[test]
    fn constants_become_numbers() {
        assert_eq!(to_postfix(tokenize("pi").unwrap()).unwrap(),
                   vec![Token::Number(std::f64::consts::PI)]);
    }

    #[test]
    fn consecutive_binary_operators_pass_through() {
        assert_eq!(rpn("2 ** 3"), "2 * 3 *");
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(rpn_err("(2 + 3"), SyntaxError::UnbalancedParentheses);
        assert_eq!(rpn_err("2 + 3)"), SyntaxError::UnbalancedParentheses);
        assert_eq!(rpn_err("sqrt(4"), SyntaxError::UnbalancedParentheses);
    }

    #[test]
    fn separators_need_a_call() {
        assert_eq!(rpn_err("1, 2"), SyntaxError::MisplacedSeparator);
        assert_eq!(rpn_err("(1, 2)"), SyntaxError::MisplacedSeparator);
        assert_eq!(rpn_err("pow((1, 2), 3)"), SyntaxError::MisplacedSeparator);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(rpn_err("foo(2)"),
                   SyntaxError::UnknownIdentifier { name: "foo".to_string() });
        assert_eq!(rpn_err("sqrt 4"),
                   SyntaxError::ExpectedArguments { name: "sqrt".to_string() });
    }

    #[test]
    fn ln_is_a_recognized_function() {
        assert_eq!(rpn("ln(2)"), "2 ln/1");
    }
}
