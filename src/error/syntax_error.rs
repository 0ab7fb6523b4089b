use thiserror::Error;

/// Represents all structural errors found while converting to postfix order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A `(` without a matching `)`, or the other way around.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    /// A `,` outside the argument list of a function call.
    #[error("misplaced separator")]
    MisplacedSeparator,
    /// An identifier that names neither a function nor a constant.
    #[error("unknown identifier: {name}")]
    UnknownIdentifier {
        /// The identifier as written, lowercased.
        name: String,
    },
    /// A function name that is not followed by its argument list.
    #[error("expected '(' after {name}")]
    ExpectedArguments {
        /// The function name.
        name: String,
    },
}
