//! # shunt
//!
//! shunt is an arithmetic expression evaluator written in Rust.
//! It scans infix expressions such as `-3 + sqrt(16) * 2^2`, reorders them to
//! postfix with the shunting-yard algorithm, and evaluates the result on a
//! value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::eval_postfix, lexer::tokenize, parser::core::to_postfix},
    util::num::normalize,
};

/// Provides unified error types for every stage of evaluation.
///
/// This module defines the errors that can be raised while lexing,
/// converting to postfix, or evaluating an expression, plus the wrapper
/// returned by [`evaluate`] and the error raised when delivering reports.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage.
/// - Categorizes failures by [`error::ErrorKind`].
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together lexing, postfix conversion, operator tables and
/// evaluation. Each stage is a pure function that hands its output to the
/// next.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator.
/// - Exposes each stage for callers that need the intermediate forms.
pub mod interpreter;
/// Remote reporting of results.
///
/// Builds result records and delivers them to a collector, such as an HTTP
/// webhook, as a [`session::Observer`].
pub mod report;
/// Calculation sessions.
///
/// Pairs descriptions with expressions, keeps a newest-first history and
/// notifies observers of every outcome.
pub mod session;
/// General utilities for numeric presentation.
///
/// This module provides the rounding applied to every result before it is
/// handed to a caller.
pub mod util;

/// Evaluates an arithmetic expression to a number.
///
/// Runs the full pipeline: tokenize, convert to postfix, evaluate, normalize.
/// Results below `1e-12` in magnitude are reported as `0`; all others are
/// rounded to 12 significant digits. The function is pure: the same input
/// always yields the same output.
///
/// # Errors
/// Returns an error if lexing, conversion or evaluation fails, or if the
/// result is not finite. The error keeps the kind of the failing stage.
///
/// # Examples
/// ```
/// use shunt::evaluate;
///
/// assert_eq!(evaluate("-3 + sqrt(16) * 2^2").unwrap(), 13.0);
/// assert_eq!(evaluate("0.1 + 0.2").unwrap(), 0.3);
/// assert_eq!(evaluate("sin(pi)").unwrap(), 0.0);
///
/// // Division by zero is an error, never a value.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    let postfix = to_postfix(tokens)?;
    let value = eval_postfix(&postfix)?;
    Ok(normalize(value)?)
}
