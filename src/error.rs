/// Lexing errors.
///
/// Raised while scanning the raw expression text: unsupported characters and
/// malformed numeric literals.
pub mod lex_error;
/// Syntax errors.
///
/// Raised while converting the infix token stream to postfix order:
/// unbalanced parentheses, misplaced separators and unknown identifiers.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised while reducing a postfix sequence to a number: arity problems,
/// division by zero, out-of-domain arguments and malformed sequences.
pub mod eval_error;
/// Report delivery errors.
///
/// Raised by collectors when a result cannot be delivered. These never
/// reach the caller of an evaluation.
pub mod report_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use report_error::ReportError;
use serde::Serialize;
pub use syntax_error::SyntaxError;
use thiserror::Error;

/// The category of a failed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The text could not be scanned into tokens.
    Lex,
    /// The tokens do not form a well-structured expression.
    Syntax,
    /// The expression is well-formed but cannot be computed.
    Eval,
}

/// Any failure produced by [`crate::evaluate`].
///
/// Each stage of the pipeline reports its own error type; this enum carries
/// them unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Returns the pipeline stage that rejected the expression.
    ///
    /// # Example
    /// ```
    /// use shunt::{error::ErrorKind, evaluate};
    ///
    /// assert_eq!(evaluate("(2 + 3").unwrap_err().kind(), ErrorKind::Syntax);
    /// assert_eq!(evaluate("2 & 3").unwrap_err().kind(), ErrorKind::Lex);
    /// assert_eq!(evaluate("5 / 0").unwrap_err().kind(), ErrorKind::Eval);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Eval(_) => ErrorKind::Eval,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex => write!(f, "lex error"),
            Self::Syntax => write!(f, "syntax error"),
            Self::Eval => write!(f, "evaluation error"),
        }
    }
}
