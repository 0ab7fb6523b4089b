use logos::Logos;

use crate::{
    error::LexError,
    interpreter::operator::{Function, Operator},
};

/// A function call as it appears in a postfix sequence.
///
/// `args` is the number of arguments written between the parentheses, which
/// may differ from the function's arity; the evaluator rejects a mismatch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Call {
    pub function: Function,
    pub args:     usize,
}

impl Call {
    #[must_use]
    pub const fn new(function: Function, args: usize) -> Self {
        Self { function, args }
    }
}

/// Represents a lexical token of an arithmetic expression.
///
/// The lexer produces numbers, identifiers, operators, parentheses and
/// separators. `UnaryMinus` and `Call` never come out of the lexer; the
/// postfix converter synthesizes them.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `42`. Signs are not
    /// part of the literal.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Identifier tokens, lowercased: function names like `sqrt` or constants
    /// like `pi`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_lowercase())]
    Identifier(String),
    /// `+`, `-`, `*`, `/`, `^`
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// Negation of the single operand that follows.
    UnaryMinus,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `,`
    #[token(",")]
    Separator,
    /// A function applied to its arguments, in postfix order.
    Call(Call),
    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Scans an expression into tokens.
///
/// Whitespace is discarded. Identifiers are lowercased but not checked
/// against the known functions; that happens during conversion.
///
/// # Errors
/// - `InvalidNumber` for a run of digits and dots with more than one dot, or
///   a lone dot.
/// - `UnsupportedCharacter` for any character that starts no token.
///
/// # Example
/// ```
/// use shunt::interpreter::{lexer::{Token, tokenize}, operator::Operator};
///
/// let tokens = tokenize("2 * Sqrt(4)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::Operator(Operator::Mul),
///                 Token::Identifier("sqrt".to_string()),
///                 Token::LeftParen,
///                 Token::Number(4.0),
///                 Token::RightParen]);
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    for (token, span) in Token::lexer(source).spanned() {
        match token {
            Ok(token) => tokens.push(token),
            Err(LexError::UnsupportedCharacter { .. }) => {
                let character = source[span.start..].chars()
                                                    .next()
                                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnsupportedCharacter { character,
                                                            offset: span.start, });
            },
            Err(e) => return Err(e),
        }
    }

    log::debug!("tokenized {source:?} into {} tokens", tokens.len());
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// The pattern accepts any run of digits and dots, so malformed literals are
/// rejected here with the full run as context.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<f64, LexError> {
    let text = lex.slice();
    let invalid = || LexError::InvalidNumber { text:   text.to_string(),
                                               offset: lex.span().start, };

    if text.matches('.').count() > 1 {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::UnaryMinus => write!(f, "neg"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Separator => write!(f, ","),
            Self::Call(call) => write!(f, "{}/{}", call.function, call.args),
            Self::Ignored => Ok(()),
        }
    }
}
