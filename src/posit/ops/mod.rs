use super::*;

/// Addition and subtraction.
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

impl Posit {
  /// Apply `f` to the value of `self`, and round the result back into a posit of the same format.
  ///
  /// This is how all the unary functions on posits are built: NaR decodes to NaN, which `f` will
  /// (almost always) propagate, and NaN and infinities encode back to NaR.
  ///
  /// ```
  /// # use dyn_posit::Posit;
  /// assert_eq!(Posit::p16(3.0).map(|x| x * x), Posit::p16(9.0));
  /// ```
  #[inline]
  pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
    Self::new(self.format, f(self.value()))
  }

  /// Apply `f` to the values of `self` and `rhs`, and round the result back into a posit of their
  /// common format. Fails with [`PositError::FormatMismatch`] if `self` and `rhs` are not of the
  /// same format.
  ///
  /// This is how all the binary functions on posits are built.
  ///
  /// ```
  /// # use dyn_posit::Posit;
  /// let hypot = Posit::p16(3.0).try_zip_with(Posit::p16(4.0), f64::hypot);
  /// assert_eq!(hypot, Ok(Posit::p16(5.0)));
  /// assert!(Posit::p16(3.0).try_zip_with(Posit::p8(4.0), f64::hypot).is_err());
  /// ```
  #[inline]
  pub fn try_zip_with(
    self,
    rhs: Self,
    f: impl FnOnce(f64, f64) -> f64,
  ) -> Result<Self, PositError> {
    let format = self.format.check(rhs.format)?;
    Ok(Self::new(format, f(self.value(), rhs.value())))
  }
}

/// Helper macro for implementing operators for all combinations of value and reference, on top
/// of the fallible `$try_name`. The operators panic if the formats don't match.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $try_name:ident) => {
    impl $trait<Posit> for Posit {
      type Output = Posit;

      #[inline]
      #[track_caller]
      fn $name(self, rhs: Self) -> Self::Output {
        self.$try_name(rhs).unwrap_or_else(|e| panic!("{e}"))
      }
    }

    impl $trait<&Posit> for Posit {
      type Output = Posit;

      #[inline]
      #[track_caller]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl $trait<Posit> for &Posit {
      type Output = Posit;

      #[inline]
      #[track_caller]
      fn $name(self, rhs: Posit) -> Self::Output { (*self).$name(rhs) }
    }

    impl $trait<&Posit> for &Posit {
      type Output = Posit;

      #[inline]
      #[track_caller]
      fn $name(self, rhs: &Posit) -> Self::Output { (*self).$name(*rhs) }
    }

    impl $trait_assign<Posit> for Posit {
      #[inline]
      #[track_caller]
      fn $name_assign(&mut self, rhs: Posit) { *self = (*self).$name(rhs) }
    }

    impl $trait_assign<&Posit> for Posit {
      #[inline]
      #[track_caller]
      fn $name_assign(&mut self, rhs: &Posit) { *self = (*self).$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator of posits.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $try_name:ident) => {
    use super::*;
    use crate::posit::rational::{IsNaR, try_is_correct_rounded};
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = Posit::one(Format::P32);
      let mut b = Posit::minus_one(Format::P32);
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is rounded correctly.
    fn is_correct_rounded(a: Posit, b: Posit) -> bool {
      let posit = a $op b;
      let exact = match (Rational::try_from(a), Rational::try_from(b)) {
        (Ok(_), Ok(b)) if stringify!($op) == "/" && b == Rational::from(0) => Err(IsNaR),
        (Ok(a), Ok(b)) => Ok(a $op b),
        _ => Err(IsNaR),
      };
      try_is_correct_rounded(exact, posit)
    }

    #[test]
    fn nar_absorbs() {
      for format in [Format::P8, Format::P16, Format::P32] {
        let nar = Posit::nar(format);
        for p in [Posit::zero(format), Posit::one(format), Posit::max_value(format), nar] {
          assert!((nar $op p).is_nar());
          assert!((p $op nar).is_nar());
        }
      }
    }

    #[test]
    fn format_mismatch() {
      assert_eq!(
        Posit::p8(1.0).$try_name(Posit::p16(1.0)),
        Err(PositError::FormatMismatch { lhs: Format::P8, rhs: Format::P16 }),
      );
      assert_eq!(
        Posit::p16(1.0).$try_name(Posit::from_bits(Format::new(16, 2).unwrap(), 0x4000)),
        Err(PositError::FormatMismatch { lhs: Format::P16, rhs: Format::new(16, 2).unwrap() }),
      );
      assert_eq!(
        Posit::nar(Format::P8).$try_name(Posit::nar(Format::P16)),
        Err(PositError::FormatMismatch { lhs: Format::P8, rhs: Format::P16 }),
      );
    }

    #[test]
    #[should_panic(expected = "format mismatch")]
    fn format_mismatch_panics() {
      let _ = Posit::p8(1.0) $op Posit::p16(1.0);
    }

    #[test]
    #[should_panic(expected = "format mismatch")]
    fn format_mismatch_panics_assign() {
      let mut a = Posit::p8(1.0);
      a $op_assign &Posit::p16(1.0);
    }

    #[test]
    fn same_as_try() {
      for a in Posit::cases_exhaustive_all(Format::new(6, 1).unwrap()) {
        for b in Posit::cases_exhaustive_all(Format::new(6, 1).unwrap()) {
          assert_eq!(a.$try_name(b), Ok(a $op b));
        }
      }
    }

    macro_rules! test_exhaustive {
      ($name:ident, $format:expr) => {
        #[test]
        fn $name() {
          let f: Format = $format;
          for a in Posit::cases_exhaustive_all(f) {
            for b in Posit::cases_exhaustive_all(f) {
              assert!(is_correct_rounded(a, b), "{:?} ⋅ {:?}", a, b)
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $format:expr) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in Posit::cases_proptest_all($format),
            b in Posit::cases_proptest_all($format),
          ) {
            assert!(is_correct_rounded(a, b), "{:?} ⋅ {:?}", a, b)
          }
        }
      };
    }

    test_exhaustive!{posit_5_0_exhaustive, Format::new(5, 0).unwrap()}
    test_exhaustive!{posit_6_1_exhaustive, Format::new(6, 1).unwrap()}
    test_exhaustive!{posit_6_2_exhaustive, Format::new(6, 2).unwrap()}
    test_exhaustive!{posit_7_3_exhaustive, Format::new(7, 3).unwrap()}
    test_exhaustive!{posit_9_1_exhaustive, Format::new(9, 1).unwrap()}

    // Above ~10 bits = 2^20 operations, it's infeasible to test binary operations exhaustively,
    // especially when not in a release build.
    test_exhaustive!{p8_exhaustive, Format::P8}
    test_proptest!{p16_proptest, Format::P16}
    test_proptest!{posit_12_2_proptest, Format::new(12, 2).unwrap()}
  }
}

pub(crate) use mk_tests;
