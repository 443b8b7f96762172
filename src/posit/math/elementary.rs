use super::*;

/// Unary functions that are simply `f64` functions on the decoded value, rounded back into a posit.
macro_rules! mk_unary {
  ($($(#[$attr:meta])* $name:ident => $f:expr;)*) => {
    impl Posit {
      $(
        $(#[$attr])*
        #[inline]
        pub fn $name(self) -> Self {
          self.map($f)
        }
      )*
    }
  }
}

mk_unary!{
  /// Sine of `self`, in radians.
  sin => f64::sin;
  /// Cosine of `self`, in radians.
  cos => f64::cos;
  /// Tangent of `self`, in radians.
  tan => f64::tan;
  /// Arcsine of `self`, in radians. NaR if `self` is outside `[-1, 1]`.
  asin => f64::asin;
  /// Arccosine of `self`, in radians. NaR if `self` is outside `[-1, 1]`.
  acos => f64::acos;
  /// Arctangent of `self`, in radians.
  atan => f64::atan;
  /// `e^self`. NaR if the result overflows an `f64`.
  exp => f64::exp;
  /// Natural logarithm of `self`. NaR if `self` is zero or negative.
  ln => f64::ln;
  /// Base 2 logarithm of `self`. NaR if `self` is zero or negative.
  log2 => f64::log2;
  /// Base 10 logarithm of `self`. NaR if `self` is zero or negative.
  log10 => f64::log10;
}

impl Posit {
  /// `self` raised to the power `rhs`, rounded. Fails with [`PositError::FormatMismatch`] if
  /// their formats differ.
  ///
  /// ```
  /// # use dyn_posit::Posit;
  /// assert_eq!(Posit::p16(2.0).try_pow(Posit::p16(10.0)), Ok(Posit::p16(1024.0)));
  /// ```
  #[inline]
  pub fn try_pow(self, rhs: Self) -> Result<Self, PositError> {
    self.try_zip_with(rhs, f64::powf)
  }

  /// As [`Self::try_pow`].
  ///
  /// # Panics
  ///
  /// If the formats of `self` and `rhs` differ.
  #[inline]
  #[track_caller]
  pub fn pow(self, rhs: Self) -> Self {
    self.try_pow(rhs).unwrap_or_else(|e| panic!("{e}"))
  }

  /// Logarithm of `self` in base `base`, rounded. Fails with [`PositError::FormatMismatch`] if
  /// their formats differ.
  ///
  /// ```
  /// # use dyn_posit::Posit;
  /// assert_eq!(Posit::p16(81.0).try_log(Posit::p16(3.0)), Ok(Posit::p16(4.0)));
  /// ```
  #[inline]
  pub fn try_log(self, base: Self) -> Result<Self, PositError> {
    self.try_zip_with(base, f64::log)
  }

  /// As [`Self::try_log`].
  ///
  /// # Panics
  ///
  /// If the formats of `self` and `base` differ.
  #[inline]
  #[track_caller]
  pub fn log(self, base: Self) -> Self {
    self.try_log(base).unwrap_or_else(|e| panic!("{e}"))
  }
}
