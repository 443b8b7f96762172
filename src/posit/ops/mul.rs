use super::*;

impl Posit {
  /// Multiply `self` by `rhs`, rounding the product to the nearest posit of their common format.
  /// Fails with [`PositError::FormatMismatch`] if their formats differ.
  ///
  /// Standard: "**multiplication**".
  #[inline]
  pub fn try_mul(self, rhs: Self) -> Result<Self, PositError> {
    self.try_zip_with(rhs, |a, b| a * b)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign, try_mul}
