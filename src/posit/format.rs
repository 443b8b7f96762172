use super::*;

impl Format {
  /// The smallest supported width `n`.
  pub const MIN_BITS: u32 = 5;

  /// The largest supported width `n`: the bits of a posit are stored in a `u64`.
  pub const MAX_BITS: u32 = u64::BITS;

  /// The largest supported exponent width `es`.
  ///
  /// The encoder places the exponent field of a posit inside the 11-bit exponent field of an
  /// `f64` (next to a regime bit), so `es` can be at most 10. With `es = 10`, `useed` is already
  /// `2^1024`, beyond the range of an `f64`.
  pub const MAX_ES: u32 = 10;

  /// 8-bit posit with no exponent bits.
  pub const P8: Self = Self { n: 8, es: 0 };

  /// 16-bit posit with 1 exponent bit.
  pub const P16: Self = Self { n: 16, es: 1 };

  /// 32-bit posit with 2 exponent bits.
  pub const P32: Self = Self { n: 32, es: 2 };

  /// Construct a format with `n` total bits and `es` exponent bits.
  ///
  /// Fails with [`PositError::InvalidConstruction`] unless
  /// `MIN_BITS ≤ n ≤ MAX_BITS` and `es ≤ MAX_ES`; invalid values are never clamped.
  pub const fn new(n: u32, es: u32) -> Result<Self, PositError> {
    if n < Self::MIN_BITS || n > Self::MAX_BITS || es > Self::MAX_ES {
      Err(PositError::InvalidConstruction { n, es })
    } else {
      Ok(Self { n, es })
    }
  }

  /// Total width in bits.
  #[inline]
  pub const fn n(self) -> u32 {
    self.n
  }

  /// Width of the exponent field in bits.
  #[inline]
  pub const fn es(self) -> u32 {
    self.es
  }

  /// A mask of the lowest `n` bits.
  #[inline]
  pub const fn mask(self) -> u64 {
    u64::MAX >> (u64::BITS - self.n)
  }

  /// The NaR bit pattern, `0b1000…0`.
  #[inline]
  pub const fn nar_bits(self) -> u64 {
    1 << (self.n - 1)
  }

  /// The bit pattern of the largest posit, `0b0111…1`.
  #[inline]
  pub const fn max_bits(self) -> u64 {
    self.nar_bits() - 1
  }

  /// The exponent of the largest posit: `maxpos = 2^max_exp`, with `max_exp = (n-2)·2^es`.
  #[inline]
  pub const fn max_exp(self) -> i64 {
    (self.n as i64 - 2) << self.es
  }

  /// `2^(2^es)`, the factor by which each extra regime bit scales a posit. May be `+∞`.
  pub fn useed(self) -> f64 {
    exp2i(1 << self.es)
  }

  /// The smallest positive posit, `2^-max_exp`, as an `f64`. May underflow to `0` for very wide
  /// formats with large `es`.
  pub fn minpos(self) -> f64 {
    exp2i(-self.max_exp())
  }

  /// The largest positive posit, `1 / minpos`, as an `f64`. May overflow to `+∞` for very wide
  /// formats with large `es`.
  pub fn maxpos(self) -> f64 {
    1.0 / self.minpos()
  }

  /// The format guard: succeeds with the common format if `self` and `other` are the same format,
  /// fails with [`PositError::FormatMismatch`] otherwise. There is no implicit conversion between
  /// formats.
  #[inline]
  pub fn check(self, other: Self) -> Result<Self, PositError> {
    if self == other {
      Ok(self)
    } else {
      Err(PositError::FormatMismatch { lhs: self, rhs: other })
    }
  }
}
