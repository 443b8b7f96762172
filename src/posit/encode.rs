use super::*;

/// Arithmetic (sign-filling) right shift of a 64-bit scratch value. Returns the shifted value and
/// the bits that were shifted out, left-aligned. Shift amounts saturate instead of overflowing.
#[inline]
fn ashr_lost(x: i64, shift: u32) -> (u64, u64) {
  let wide = (i128::from(x) << u64::BITS) >> shift.min(i128::BITS - 1);
  ((wide >> u64::BITS) as u64, wide as u64)
}

/// Logical (zero-filling) right shift of a 64-bit scratch value. Shift amounts of 64 or more
/// saturate to a full shift instead of overflowing.
#[inline]
fn lshr(x: u64, shift: u32) -> u64 {
  x.checked_shr(shift).unwrap_or(0)
}

/// Split a positive, finite, nonzero `f64` into its unbiased exponent and its 52 explicit
/// fraction bits, such that `x = (1 + frac / 2^52) × 2^exp`.
///
/// Subnormals have no hidden bit; they are normalised here so that the result has the same form
/// as for normal numbers.
fn split_f64(x: f64) -> (i64, u64) {
  debug_assert!(x.is_finite() && x > 0.0);
  const MANTISSA_DIGITS_EXPLICIT: u32 = f64::MANTISSA_DIGITS - 1;
  const MANTISSA_MASK: u64 = (1 << MANTISSA_DIGITS_EXPLICIT) - 1;
  const EXP_BIAS: i64 = f64::MAX_EXP as i64 - 1;
  const EXP_MASK: u64 = (1 << 11) - 1;

  let bits = x.to_bits();
  let mantissa = bits & MANTISSA_MASK;
  let biased = (bits >> MANTISSA_DIGITS_EXPLICIT) & EXP_MASK;

  if biased != 0 {
    (biased as i64 - EXP_BIAS, mantissa)
  } else {
    // Subnormal: `x = mantissa × 2^-1074`. Move the leading 1 up to the hidden bit position and
    // drop it; the exponent drops by the same amount.
    //
    // Example:
    //   mantissa = 0b0000…0001101 (leading 1 at bit 3)
    //   becomes    0b1010000…000 (with the leading 1 dropped), exp = 3 - 1074
    let msb = u64::BITS - 1 - mantissa.leading_zeros();
    let frac = (mantissa << (MANTISSA_DIGITS_EXPLICIT - msb)) & MANTISSA_MASK;
    (msb as i64 + 1 - EXP_BIAS - MANTISSA_DIGITS_EXPLICIT as i64, frac)
  }
}

/// Round a 64-bit posit image (the sign bit at bit 63, always 0 here, followed by the regime,
/// exponent, and fraction bits with as much precision as we have) to `n` bits. `lost` holds any
/// further bits that did not fit below bit 0 of `image`, left-aligned. The result is the `n`-bit
/// pattern in the lowest `n` bits.
///
/// The rule from the posit standard: let `u < x < w` be the two `n`-bit posits around `x`, and `v`
/// the `n+1`-bit posit whose bit pattern is that of `u` followed by a `1` (i.e. the midpoint in
/// bit pattern space). Then `x` rounds to `u` if `x < v`, or if `x == v` and `u` is even, and to
/// `w` otherwise. In other words: round to nearest bit pattern, ties to even bit pattern.
///
/// There is one exception: if the image is *exactly* the pattern `0b0000…0001` at `n+1` bits (half
/// of the smallest regime step above zero), it rounds *up*, away from zero, instead of to the
/// even pattern (which would be zero).
pub(crate) fn round_bits(n: u32, image: u64, lost: u64) -> u64 {
  // Number of bits below the cut
  let cut = u64::BITS - n;

  if image == lshr(1 << 63, n) && lost == 0 {
    return (image << 1) >> cut
  }

  // Call `odd` the lowest kept bit, `round` the first bit below the cut, and `sticky` the OR of
  // every bit after that (including `lost`). In terms of these, we have
  //
  //   odd | round | sticky | result
  //   ----+-------+--------+-------
  //    ?  |   0   |   ?    | round down
  //    ?  |   1   |   1    | round up
  //    0  |   1   |   0    | round down (tie, to even)
  //    1  |   1   |   0    | round up (tie, to even)
  //
  // So we round up iff `round & (odd | sticky)`.
  let kept = image >> cut;
  let odd = kept & 1;
  let (round, sticky) = if cut == 0 {
    (lost >> 63, lost << 1 != 0)
  } else {
    ((image >> (cut - 1)) & 1, image & ((1 << (cut - 1)) - 1) != 0 || lost != 0)
  };
  kept.wrapping_add(round & (odd | u64::from(sticky)))
}

impl Format {
  /// Two's complement negation of `bits` within `n` bits, if `negative`; in any case, masked to
  /// `n` bits.
  #[inline]
  fn negate_if(self, bits: u64, negative: bool) -> u64 {
    let bits = if negative { bits.wrapping_neg() } else { bits };
    bits & self.mask()
  }

  /// Encode `value` as the bit pattern of the nearest `n`-bit posit, [rounding according to the
  /// standard]:
  ///
  ///   - `±0` encodes to `0`.
  ///   - Any infinity or NaN encodes to NaR.
  ///   - A value at least as large in absolute value as `maxpos` encodes to `±maxpos`, and a
  ///     nonzero value smaller in absolute value than `minpos` encodes to `±minpos`: posits never
  ///     overflow to NaR and never underflow to zero.
  ///   - Otherwise, the value is rounded to the nearest bit pattern, or in case of a tie, to the
  ///     even bit pattern.
  ///
  /// This function never fails and never panics.
  ///
  /// ```
  /// # use dyn_posit::Format;
  /// assert_eq!(Format::P8.encode(0.515625), 0b00100001);
  /// assert_eq!(Format::P8.encode(1e10), 0b01111111);
  /// assert_eq!(Format::P8.encode(-1e-10), 0b11111111);
  /// assert_eq!(Format::P8.encode(f64::NAN), 0b10000000);
  /// ```
  ///
  /// [rounding according to the standard]: https://posithub.org/docs/posit_standard-2.pdf#section.4
  pub fn encode(self, value: f64) -> u64 {
    if value == 0.0 {
      return 0
    }
    if !value.is_finite() {
      return self.nar_bits()
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    if magnitude >= self.maxpos() {
      return self.negate_if(self.max_bits(), negative)
    }
    if magnitude < self.minpos() {
      return self.negate_if(1, negative)
    }

    let (exponent, fraction) = split_f64(magnitude);

    // The exponent of the value splits into a regime `k` (the bits above the lowest `es`) and the
    // posit exponent field (the lowest `es` bits). Note that `>>` rounds towards -∞, so that
    // the exponent field is always nonnegative.
    let es = self.es;
    let exp_negative = exponent < 0;
    let regime = exponent >> es;

    // Build the image of the posit in a 64-bit register in three parts, left-aligned:
    //
    //   - The last two bits of the regime: `10` if the regime is positive (a run of 1s terminated
    //     by a 0) or `01` if it's negative (a run of 0s terminated by a 1).
    //   - The `es` exponent bits.
    //   - The 52 fraction bits of the `f64` (only the top `52 - es + 10` of them fit if `es` is
    //     large, which is fine: those are the ones that matter for rounding).
    //
    //   regime_bits:   rr000000000…
    //   exponent_bits: 00eee000000…
    //   fraction_bits: 00000ffffff…
    let regime_bits = (1u64 << 63) >> u32::from(exp_negative);
    let exponent_bits = ((exponent as u64) & ((1 << es) - 1)) << (u64::BITS - 2 - es);
    let fraction_bits = fraction << (Format::MAX_ES - es);
    let image = regime_bits | exponent_bits | fraction_bits;

    // Now "grow" the regime to its full length with an arithmetic shift to the right: the msb is
    // replicated, turning `10…` into a run of `k+2` 1s followed by 0 for `k ≥ 0`, and `01…` into
    // a run of `-k+1` 0s followed by 1 for `k < 0`. The extra leading bit then becomes the sign
    // bit, which is cleared (the value is positive at this point).
    //
    // Example (k = 2):
    //   image      = 0b10eeefff…
    //   ashr by 3  = 0b11110eeefff…
    //   clear sign = 0b01110eeefff…  (run of 3 1s = regime 2, correct)
    //
    // Example (k = -2):
    //   image      = 0b01eeefff…
    //   ashr by 2  = 0b0001eeefff…   (sign 0, run of 2 0s = regime -2, correct)
    //
    // Whatever falls off the bottom is kept in `lost`, for rounding.
    let shift = (regime + 1).unsigned_abs() as u32 + u32::from(exp_negative);
    let (image, lost) = ashr_lost(image as i64, shift);
    let image = image & !(1 << 63);

    let mut rounded = round_bits(self.n, image, lost);

    // If the regime alone is at least as long as the posit, the run has been cut short and
    // rounding has carried one step too far; undo it.
    let regime_max = (1023 >> es) + 1;
    let regime_len = regime.abs();
    if i64::from(self.n) <= regime_len && regime_len < regime_max {
      rounded = rounded.wrapping_sub(regime.signum() as u64);
    }

    self.negate_if(rounded, negative)
  }
}
