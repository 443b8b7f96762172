use super::*;

impl Posit {
  /// Add `self` and `rhs`, rounding the sum to the nearest posit of their common format. Fails
  /// with [`PositError::FormatMismatch`] if their formats differ.
  ///
  /// ```
  /// # use dyn_posit::Posit;
  /// let sum = Posit::p8(0.015625).try_add(Posit::p8(0.5));
  /// assert_eq!(sum.map(Posit::to_bits), Ok(0b00100001));
  /// ```
  ///
  /// Standard: "**addition**".
  #[inline]
  pub fn try_add(self, rhs: Self) -> Result<Self, PositError> {
    self.try_zip_with(rhs, |a, b| a + b)
  }

  /// Subtract `rhs` from `self`, rounding the difference to the nearest posit of their common
  /// format. Fails with [`PositError::FormatMismatch`] if their formats differ.
  ///
  /// Standard: "**subtraction**".
  #[inline]
  pub fn try_sub(self, rhs: Self) -> Result<Self, PositError> {
    self.try_zip_with(rhs, |a, b| a - b)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign, try_add}
super::mk_ops!{Sub, SubAssign, sub, sub_assign, try_sub}
