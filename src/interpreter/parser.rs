/// Core conversion logic.
///
/// Drives the shunting-yard pass over the token stream: classifies each
/// token, resolves identifiers and detects unary minus.
pub mod core;

/// The operator stack.
///
/// Holds pending operators, functions and open parentheses, and decides when
/// they are flushed to the postfix output.
mod stack;
