use super::*;

use core::cmp::Ordering;

impl Posit {
  /// The `n`-bit pattern, sign-extended to an `i64`. Ordering these as integers is the same as
  /// ordering the posits by value (except for NaR, the smallest integer).
  #[inline]
  fn signed_bits(self) -> i64 {
    (self.bits << (u64::BITS - self.format.n)) as i64
  }

  /// Compare `self` and `other` by value, failing with [`PositError::FormatMismatch`] if they are
  /// of different formats.
  ///
  /// The result is `None` if exactly one of them is NaR; NaR compares [`Equal`](Ordering::Equal)
  /// to itself.
  ///
  /// ```
  /// # use dyn_posit::{Format, Posit, PositError};
  /// # use core::cmp::Ordering;
  /// assert_eq!(Posit::p8(1.0).try_cmp(Posit::p8(2.0)), Ok(Some(Ordering::Less)));
  /// assert_eq!(Posit::p8(1.0).try_cmp(Posit::nar(Format::P8)), Ok(None));
  /// assert!(matches!(
  ///   Posit::p8(1.0).try_cmp(Posit::p16(1.0)),
  ///   Err(PositError::FormatMismatch { .. }),
  /// ));
  /// ```
  pub fn try_cmp(self, other: Self) -> Result<Option<Ordering>, PositError> {
    self.format.check(other.format)?;
    Ok(match (self.is_nar(), other.is_nar()) {
      (false, false) => Some(self.signed_bits().cmp(&other.signed_bits())),
      (true, true) => Some(Ordering::Equal),
      _ => None,
    })
  }

  /// Test `self` and `other` for equality (of bit patterns, so NaR equals NaR), failing with
  /// [`PositError::FormatMismatch`] if they are of different formats.
  ///
  /// Unlike `==`, which is simply `false` across formats.
  pub fn try_eq(self, other: Self) -> Result<bool, PositError> {
    self.format.check(other.format)?;
    Ok(self.bits == other.bits)
  }
}

/// Posits are ordered by value; NaR and any real number are unordered. Comparing posits of
/// different formats panics, as do the arithmetic operators: use [`Posit::try_cmp`] to get the
/// error instead.
impl PartialOrd for Posit {
  #[inline]
  #[track_caller]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.try_cmp(*other).unwrap_or_else(|e| panic!("{e}"))
  }
}

/// Exact: every posit of up to 32 bits (and most wider ones) is representable as an `f64`. NaR
/// converts to NaN.
impl From<Posit> for f64 {
  #[inline]
  fn from(value: Posit) -> Self {
    value.value()
  }
}
