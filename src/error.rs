use crate::Format;

/// The error type for operations on posits that can fail.
///
/// Note that *numeric* failures (dividing by zero, the square root of a negative number, a NaR
/// operand, etc) are never reported through this type: they produce a [NaR](crate::Posit::nar)
/// result, which then propagates through any further computation. A `PositError` always means
/// the caller did something that has no numeric meaning at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositError {
  /// Two posits of different formats were combined in a binary operation or comparison.
  #[error("format mismatch: cannot combine {lhs} with {rhs}")]
  FormatMismatch {
    lhs: Format,
    rhs: Format,
  },

  /// A format was requested with a width or exponent size outside the supported range.
  #[error(
    "invalid posit format: n = {n}, es = {es} (need {min} <= n <= {max} and es <= {max_es})",
    min = Format::MIN_BITS,
    max = Format::MAX_BITS,
    max_es = Format::MAX_ES
  )]
  InvalidConstruction {
    n: u32,
    es: u32,
  },
}
