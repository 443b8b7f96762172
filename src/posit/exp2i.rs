/// `2^k` as an `f64`, assembled directly from its bit pattern.
///
/// Exact for every `k` in the normal and subnormal range of `f64`; `+∞` above it and `0` below it.
#[inline]
pub(crate) fn exp2i(k: i64) -> f64 {
  const BIAS: i64 = f64::MAX_EXP as i64 - 1;
  const MANTISSA_DIGITS_EXPLICIT: i64 = f64::MANTISSA_DIGITS as i64 - 1;
  const MIN_NORMAL: i64 = 1 - BIAS;
  const MIN_SUBNORMAL: i64 = MIN_NORMAL - MANTISSA_DIGITS_EXPLICIT;

  if k > BIAS {
    f64::INFINITY
  } else if k >= MIN_NORMAL {
    f64::from_bits(((k + BIAS) as u64) << MANTISSA_DIGITS_EXPLICIT)
  } else if k >= MIN_SUBNORMAL {
    f64::from_bits(1 << (k - MIN_SUBNORMAL))
  } else {
    0.0
  }
}
