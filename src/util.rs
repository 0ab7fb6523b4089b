/// Numeric presentation helpers.
///
/// Turns raw `f64` results into the values reported to callers: collapses
/// near-zero noise, rounds to a fixed number of significant digits and
/// rejects non-finite results.
pub mod num;
