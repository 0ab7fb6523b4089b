/// Function dispatch.
///
/// Maps each recognized function to its implementation and checks the
/// argument count before calling it.
pub mod core;
/// Trigonometric functions and `abs`.
pub mod builtin;
/// Natural logarithm, available as `log` and `ln`.
pub mod log;
/// The `sqrt` (square root) function implementation.
///
/// Rejects negative input instead of producing `NaN`.
pub mod sqrt;
