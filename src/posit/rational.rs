use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs, Reciprocal};

/// The error type returned when a [Posit] cannot be converted to a [Rational] because it is
/// [NaR](Posit::nar).
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNaR;

impl Posit {
  /// Convert a posit **which is not 0 or NaR** into a [Rational] value. Panics if `self` is 0 or
  /// NaR.
  ///
  /// This is a **super-explicit** rendition of the algorithm for decoding a posit, independent
  /// of [`Format::decode`], since this is what we will check it against!
  fn into_rational_regular(self) -> Rational {
    let n = self.format.n();
    let es = self.format.es();

    // Left-align the posit in an i64, so that its sign bit is the sign bit of the i64.
    let x = (self.bits << (u64::BITS - n)) as i64;

    // If the number if NaR or 0, panic.
    if x == 0 || x == i64::MIN { panic!("Should not pass {x:b} to into_rational_regular") }

    // First extract the sign; the rest of the algorithm takes place with the two's complement
    // absolute value of the posit.
    let sign = x < 0;
    let x = x.unsigned_abs();

    // Shift out the sign bit, the next one is the sign of the regime. If it's 0, we are looking
    // for the number of consecutive 0s terminated by 1, if it's 1, we are looking for the number
    // of consecutive 1s terminated by 0 (or by the end of the posit, in which case the shift has
    // brought in a terminating 0 anyway).
    let x = x << 1;
    let regime_sign = x >> 63;
    let regime_len = if regime_sign == 0 { x.leading_zeros() } else { (!x).leading_zeros() };
    // The regime is
    //   -n  if it's a run of n 0s, or
    //   n-1 if it's a run of n 1s.
    let regime = if regime_sign == 0 { -i64::from(regime_len) } else { i64::from(regime_len) - 1 };

    // Shift out the regime bits incl. the terminating bit. After this, the leftmost `es` bits are
    // the exponent; missing exponent bits are filled with 0s from the right by the shift.
    let x = (x << regime_len) << 1;
    let exponent = if es != 0 { x >> (u64::BITS - es) } else { 0 };

    // The remaining bits, left-aligned, are the numerator of the fraction over 2^64, with an
    // implicit 1 in front.
    let fraction = x << es;

    let scale = Rational::power_of_2((regime << es) + exponent as i64);
    let fraction = Rational::from(1) + Rational::from(fraction) / Rational::power_of_2(64i64);
    let magnitude = scale * fraction;
    if sign { -magnitude } else { magnitude }
  }
}

impl TryFrom<Posit> for Rational {
  type Error = IsNaR;

  fn try_from(value: Posit) -> Result<Self, Self::Error> {
    if value.is_zero() {
      Ok(Rational::from(0))
    } else if value.is_nar() {
      Err(IsNaR)
    } else {
      Ok(value.into_rational_regular())
    }
  }
}

/// Check whether the rational number `exact` should be rounded to `posit`.
///
///   - Over- or under-flow (beyond `±maxpos` or within `±minpos`): round to `±maxpos` or
///     `±minpos` respectively.
///   - Geometric case (exponent bits cut off by a long regime): round to nearest posit in terms
///     of absolute **ratio**, ties to even.
///   - Normal case (remaining domain): round to nearest posit in terms of absolute
///     **difference**, ties to even.
pub fn is_correct_rounded(exact: Rational, posit: Posit) -> bool {
  let format = posit.format();
  let n = i64::from(format.n());
  let es = format.es();

  // Only the exact number 0 is rounded to posit 0.
  if posit.is_zero() { return exact == Rational::from(0) }
  // No number is rounded to posit NaR.
  if posit.is_nar() { return false }

  let exact_of = |p: Posit| Rational::try_from(p).expect("not NaR");

  // Overflow case: if exact is > MAX, < MIN, > 0 and < MIN_POSITIVE, or < 0 and > MAX_NEGATIVE
  if exact > Rational::from(0) {
    if exact >= exact_of(Posit::max_value(format)) {
      return posit == Posit::max_value(format)
    }
    else if exact <= exact_of(Posit::min_positive(format)) {
      return posit == Posit::min_positive(format)
    }
  } else if exact < Rational::from(0) {
    if exact <= exact_of(Posit::min_value(format)) {
      return posit == Posit::min_value(format)
    }
    else if exact >= exact_of(Posit::max_negative(format)) {
      return posit == Posit::max_negative(format)
    }
  } else {
    // `exact` is 0 but `posit` isn't.
    return false
  }

  // Remaining cases: round to nearest (arithmetic nearest, or geometric nearest *only if* exponent
  // bits are cut). `distance` uses arithmetic or geometric distance accordingly.
  let distance = {
    // If `1 + regime_len + 1 + es > n`, i.e. on the edges of the posit's dynamic range, some
    // exponent bits are chopped and hence we are in a region of geometric rounding.
    //
    // So if `regime_len ≤ n - 2 - es`, we are in the arithmetic rounding region, otherwise we're
    // on the geometric rounding region. This `regime_len` corresponds to an exponent of
    // `(n - 2 - es) << es`.
    let geometric_cutoff = Rational::power_of_2((n - 2 - i64::from(es)) << es);
    let arithmetic_range = (&geometric_cutoff).reciprocal() ..= geometric_cutoff;
    let is_arithmetic_rounding = arithmetic_range.contains(&(&exact).abs());

    move |x: &Rational, y: &Rational| {
      if is_arithmetic_rounding {
        x-y
      } else {
        if x.abs() >= y.abs() {x/y} else {y/x}
      }
    }
  };

  // `posit` represents exactly the number `curr`, while the immediately previous and next posits
  // represent exactly the numbers `prev` and `next`, respectively.
  let prev = Rational::try_from(posit.prior());
  let curr = exact_of(posit);
  let next = Rational::try_from(posit.next());
  let posit_is_even = posit.to_bits() & 1 == 0;

  if exact == curr {
    // `exact` is exactly represented by `posit`
    true
  } else if let Ok(prev) = prev && prev < exact && exact < curr {
    // `exact` lies in interval `]posit.prior(), posit[`: needs to be closer to `posit` than to
    // `posit.prior()`, or same distance if `posit` is even.
    let distance_curr = distance(&curr, &exact);
    let distance_prev = distance(&exact, &prev);
    distance_curr < distance_prev || distance_curr == distance_prev && posit_is_even
  } else if let Ok(next) = next && curr < exact && exact < next {
    // `exact` lies in interval `]posit, posit.next()[`: needs to be closer to `posit` than to
    // `posit.next()`, or same distance if `posit` is even.
    let distance_curr = distance(&exact, &curr);
    let distance_next = distance(&next, &exact);
    distance_curr < distance_next || distance_curr == distance_next && posit_is_even
  } else {
    // Not in interval
    false
  }
}

/// As [is_correct_rounded], but an `exact` result that is not a real number must be rounded to
/// NaR.
pub fn try_is_correct_rounded(exact: Result<Rational, IsNaR>, posit: Posit) -> bool {
  match exact {
    Ok(exact) => is_correct_rounded(exact, posit),
    Err(IsNaR) => posit.is_nar(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rational(format: Format, bits: u64) -> Result<Rational, IsNaR> {
    Rational::try_from(Posit::from_bits(format, bits))
  }

  /// Manually test all bit patterns for a 6-bit positive with 2-bit exponent (cf. Posit
  /// Arithmetic, John L. Gustafson, Chapter 2).
  #[test]
  fn exhaustive_posit_6_2() {
    let f = Format::new(6, 2).unwrap();

    assert_eq!(rational(f, 0b000000), Ok(Rational::from(0)));
    assert_eq!(rational(f, 0b100000), Err(IsNaR));

    for (bits, (num, den)) in [
      (0b000001, (1, 65536)),
      (0b000010, (1, 4096)),
      (0b000011, (1, 1024)),
      (0b000100, (1, 256)),
      (0b000101, (1, 128)),
      (0b000110, (1, 64)),
      (0b000111, (1, 32)),
      (0b001000, (2, 32)),
      (0b001001, (3, 32)),
      (0b001010, (4, 32)),
      (0b001011, (6, 32)),
      (0b001100, (8, 32)),
      (0b001101, (12, 32)),
      (0b001110, (16, 32)),
      (0b001111, (24, 32)),
      (0b010000, (1, 1)),
      (0b010001, (3, 2)),
      (0b010010, (2, 1)),
      (0b010011, (3, 1)),
      (0b010100, (4, 1)),
      (0b010101, (6, 1)),
      (0b010110, (8, 1)),
      (0b010111, (12, 1)),
      (0b011000, (16, 1)),
      (0b011001, (32, 1)),
      (0b011010, (64, 1)),
      (0b011011, (128, 1)),
      (0b011100, (256, 1)),
      (0b011101, (1024, 1)),
      (0b011110, (4096, 1)),
      (0b011111, (65536, 1)),
    ] {
      assert_eq!(rational(f, bits), Ok(Rational::from_signeds(num as i64, den)));
      assert_eq!(rational(f, bits.wrapping_neg()), Ok(Rational::from_signeds(-num as i64, den)));
    }
  }

  #[test]
  fn examples() {
    let f = Format::new(6, 1).unwrap();
    assert_eq!(rational(f, 0b100001), Ok(Rational::from(-256)));
    assert_eq!(rational(f, 0b000001), Ok(Rational::from_signeds(1, 256)));
    assert_eq!(rational(f, 0b001101), Ok(Rational::from_signeds(5, 8)));
    assert_eq!(rational(f, 0b110010), Ok(Rational::from_signeds(-3, 4)));

    let f = Format::new(16, 2).unwrap();
    assert_eq!(rational(f, 0b0_01_00_10000001000), Ok(Rational::from_signeds(3080, 1 << 15)));
    assert_eq!(rational(f, 0b0_01_01_11011001000), Ok(Rational::from_signeds(3784, 1 << 14)));
    assert_eq!(rational(f, 0b0_11110_10_11001000), Ok(Rational::from(456 << 6)));
    assert_eq!(rational(f, 0b1_00001_10_00111000), Ok(Rational::from(-456 << 5)));
    assert_eq!(rational(f, 0b1_1110_10_100111000), Ok(Rational::from_signeds(-712, 1 << 20)));
    assert_eq!(rational(f, 0b1_11111111111110_1), Ok(Rational::from_signeds(-1, 1i64 << 50)));
    assert_eq!(rational(f, 0b0_11111111110_00_10), Ok(Rational::from(3i64 << 35)));

    assert_eq!(Rational::try_from(Posit::max_value(f)), Ok(Rational::from(1i64 << 56)));
    assert_eq!(Rational::try_from(Posit::min_value(f)), Ok(Rational::from(-1i64 << 56)));
    assert_eq!(Rational::try_from(Posit::min_positive(f)), Ok(Rational::from_signeds(1, 1i64 << 56)));
    assert_eq!(Rational::try_from(Posit::max_negative(f)), Ok(Rational::from_signeds(-1, 1i64 << 56)));
    assert_eq!(Rational::try_from(Posit::one(f)), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(Posit::minus_one(f)), Ok(Rational::from(-1)));
    assert_eq!(Rational::try_from(Posit::nar(f)), Err(IsNaR));
  }

  #[test]
  fn full_width() {
    let f = Format::new(64, 3).unwrap();
    assert_eq!(Rational::try_from(Posit::one(f)), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(Posit::max_value(f)), Ok(Rational::power_of_2(62i64 << 3)));
    assert_eq!(Rational::try_from(Posit::min_positive(f)), Ok(Rational::power_of_2(-62i64 << 3)));
  }

  #[test]
  fn correct_rounded() {
    let f = Format::P8;
    let one = Posit::one(f);
    // 1 + 1/64 is a tie between 1 (even) and 1 + 1/32 (odd)
    assert!(is_correct_rounded(Rational::from_signeds(65, 64), one));
    assert!(!is_correct_rounded(Rational::from_signeds(65, 64), one.next()));
    assert!(is_correct_rounded(Rational::from_signeds(66, 64), one.next()));
    assert!(!is_correct_rounded(Rational::from(2), one));
    // Saturation
    assert!(is_correct_rounded(Rational::from(1000), Posit::max_value(f)));
    assert!(is_correct_rounded(Rational::from_signeds(-1, 1000), Posit::max_negative(f)));
    // Zero and NaR
    assert!(is_correct_rounded(Rational::from(0), Posit::zero(f)));
    assert!(!is_correct_rounded(Rational::from(1), Posit::zero(f)));
    assert!(!is_correct_rounded(Rational::from(1), Posit::nar(f)));
    assert!(try_is_correct_rounded(Err(IsNaR), Posit::nar(f)));
    assert!(!try_is_correct_rounded(Err(IsNaR), one));
  }
}
