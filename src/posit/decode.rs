use super::*;

impl Format {
  /// Decode the `n`-bit pattern `bits` into its exact value. Bits above the lowest `n` are
  /// ignored.
  ///
  ///   - `0` decodes to `0.0`.
  ///   - NaR (`0b1000…0`) decodes to NaN.
  ///   - Every other pattern decodes to its value, rounded to an `f64`. The result is exact
  ///     whenever the value fits in an `f64` (which is the case for every posit of 32 bits or fewer
  ///     with `es ≤ 3`). For formats whose range exceeds that of an `f64`, such as `(64, 5)`, the
  ///     most extreme patterns decode to `±0.0` or `±∞`.
  ///
  /// This function never fails and never panics.
  ///
  /// ```
  /// # use dyn_posit::Format;
  /// assert_eq!(Format::P8.decode(0b00000001), 0.015625);
  /// assert_eq!(Format::P8.decode(0b11000000), -1.0);
  /// assert!(Format::P8.decode(0b10000000).is_nan());
  /// ```
  pub fn decode(self, bits: u64) -> f64 {
    let bits = bits & self.mask();
    if bits == 0 {
      return 0.0
    }
    if bits == self.nar_bits() {
      return f64::NAN
    }

    // Bit `i` of the pattern, counting from the lsb; bits "past the end" (i < 0) read as 0.
    let bit = |i: i32| if i >= 0 { (bits >> i) & 1 } else { 0 };
    let n = self.n as i32;

    // The sign bit. Note that we do *not* take the two's complement of negative patterns before
    // reading the fields; the formula at the end accounts for the sign directly.
    let sign = bit(n - 1) as i64;

    // The regime is a run of identical bits right after the sign, terminated by the opposite bit
    // or by the end of the posit. A run of `k` 0s is regime `-k`, a run of `k` 1s is regime `k-1`.
    let mut i = n - 2;
    let run_bit = bit(i);
    let mut run = 0i64;
    while i >= 0 && bit(i) == run_bit {
      run += 1;
      i -= 1;
    }
    let regime = if run_bit == 0 { -run } else { run - 1 };
    // Skip the terminating bit.
    i -= 1;

    // The next `es` bits are the exponent, as an unsigned integer. If the regime has eaten into
    // the exponent field, the missing bits are 0s.
    let mut exponent = 0i64;
    for _ in 0 .. self.es {
      exponent = (exponent << 1) | bit(i) as i64;
      i -= 1;
    }

    // The fraction always has `n - 3 - es` bits (the most it can have, with the shortest possible
    // regime), padded with 0s on the right if the regime was longer.
    let frac_width = (n - 3 - self.es as i32).max(0);
    let mut frac = 0u64;
    for _ in 0 .. frac_width {
      frac = (frac << 1) | bit(i);
      i -= 1;
    }
    let frac = frac as f64 * exp2i(-i64::from(frac_width));

    // Assemble the value:
    //
    //   (1 - 3s + f) × 2 ^ ((1 - 2s) × (2^es × regime + exponent + s))
    //
    // For positive patterns (s = 0) this is the familiar (1 + f) × useed^regime × 2^exponent. For
    // negative patterns (s = 1) it is (f - 2) × 2^-(2^es × regime + exponent + 1), which is the
    // value of the two's complement of the pattern, negated, without computing the two's
    // complement.
    let significand = 1.0 - 3.0 * sign as f64 + frac;
    let scale = (1 - 2 * sign) * ((regime << self.es) + exponent + sign);
    significand * exp2i(scale)
  }
}
