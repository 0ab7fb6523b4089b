/// The evaluator module reduces postfix sequences to numbers.
///
/// The evaluator walks the postfix output of the parser with a value stack,
/// applies operators and built-in functions, and reports evaluation errors
/// such as division by zero, out-of-domain arguments or malformed sequences.
///
/// # Responsibilities
/// - Applies binary operators, unary minus and function calls.
/// - Checks function arity and argument domains.
/// - Ensures a sequence reduces to exactly one value.
pub mod evaluator;
/// The lexer module tokenizes expression text for further processing.
///
/// The lexer (tokenizer) reads the raw expression and produces a stream of
/// tokens: numbers, identifiers, operators, parentheses and argument
/// separators. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Discards whitespace and lowercases identifiers.
/// - Reports lexical errors for unsupported characters and malformed numbers.
pub mod lexer;
/// Operator and function tables.
///
/// Precedence and associativity of the binary operators, the set of
/// recognized functions with their arity, and the named constants.
pub mod operator;
/// The parser module converts infix tokens to postfix order.
///
/// The parser runs the shunting-yard algorithm over the token stream,
/// resolving precedence, associativity, grouping, function calls and unary
/// minus, so that the evaluator only has to process a flat sequence.
///
/// # Responsibilities
/// - Orders tokens so that operators follow their operands.
/// - Distinguishes unary from binary minus.
/// - Validates parentheses, separators and identifiers.
pub mod parser;
