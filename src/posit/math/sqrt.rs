use super::*;

impl Posit {
  /// Return the square root of `self`, rounded to the nearest posit. The square root of a
  /// negative number is NaR.
  ///
  /// ```
  /// # use dyn_posit::Posit;
  /// assert_eq!(Posit::p16(2.25).sqrt(), Posit::p16(1.5));
  /// assert!(Posit::p16(-4.0).sqrt().is_nar());
  /// ```
  ///
  /// Standard: "**sqrt**".
  #[inline]
  pub fn sqrt(self) -> Self {
    self.map(|x| if x < 0.0 { f64::NAN } else { x.sqrt() })
  }
}
