use super::*;

impl Posit {
  /// Returns the posit value of the lexicographic successor of `self`'s representation, wrapping
  /// around within `n` bits.
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce a
  /// [NaR](Posit::nar) output on a [NaR](Posit::nar) input.
  ///
  /// Standard: "**next**".
  #[inline]
  pub fn next(self) -> Self {
    Self::from_bits(self.format, self.bits.wrapping_add(1))
  }

  /// Returns the posit value of the lexicographic predecessor of `self`'s representation,
  /// wrapping around within `n` bits.
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce a
  /// [NaR](Posit::nar) output on a [NaR](Posit::nar) input.
  ///
  /// Standard: "**prior**".
  #[inline]
  pub fn prior(self) -> Self {
    Self::from_bits(self.format, self.bits.wrapping_sub(1))
  }

  /// Return the absolute value of `self`.
  ///
  /// Standard: "**abs**".
  #[inline]
  pub fn abs(self) -> Self {
    self.map(f64::abs)
  }
}

impl core::ops::Neg for Posit {
  type Output = Posit;

  /// Standard: "**negate**".
  #[inline]
  fn neg(self) -> Self::Output {
    self.map(|x| -x)
  }
}

impl core::ops::Neg for &Posit {
  type Output = Posit;

  /// Standard: "**negate**".
  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
