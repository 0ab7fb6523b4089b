/// Core evaluation logic.
///
/// Walks a postfix sequence with a value stack and reports malformed
/// sequences.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements `+`, `-`, `*`, `/` and `^` on two operands, including the
/// division-by-zero check.
pub mod binary;

/// Function evaluation.
///
/// Handles calls to the built-in functions: argument count checks and the
/// domain of each function.
pub mod function;
