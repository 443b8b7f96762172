use super::*;

impl Posit {
  /// Divide `self` by `rhs`, rounding the quotient to the nearest posit of their common format.
  /// Fails with [`PositError::FormatMismatch`] if their formats differ.
  ///
  /// Division by zero is not an error: the result is NaR.
  ///
  /// ```
  /// # use dyn_posit::Posit;
  /// assert!(Posit::p8(1.0).try_div(Posit::p8(0.0)).unwrap().is_nar());
  /// ```
  ///
  /// Standard: "**division**".
  #[inline]
  pub fn try_div(self, rhs: Self) -> Result<Self, PositError> {
    self.try_zip_with(rhs, |a, b| a / b)
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign, try_div}
