use super::*;

impl Posit {
  /// Zero (`0`), the additive identity element.
  //
  // Represented by the bit pattern `0b0000...0`.
  #[inline]
  pub const fn zero(format: Format) -> Self {
    Self { format, bits: 0 }
  }

  /// Not-a-real (`NaR`).
  //
  // Represented by the bit pattern `0b1000...0`.
  #[inline]
  pub const fn nar(format: Format) -> Self {
    Self { format, bits: format.nar_bits() }
  }

  /// Largest representable value, `maxpos`, equal to `-min_value`.
  //
  // Represented by the bit pattern `0b0111...1`.
  #[inline]
  pub const fn max_value(format: Format) -> Self {
    Self { format, bits: format.max_bits() }
  }

  /// Smallest representable value, `-maxpos`, equal to `-max_value`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::min_positive`]!
  //
  // Represented by the bit pattern `0b100...01`.
  #[inline]
  pub const fn min_value(format: Format) -> Self {
    Self { format, bits: format.nar_bits() + 1 }
  }

  /// Smallest *positive* value, `minpos`, equal to `-max_negative`.
  //
  // Represented by the bit pattern `0b000...01`.
  #[inline]
  pub const fn min_positive(format: Format) -> Self {
    Self { format, bits: 1 }
  }

  /// Largest *negative* value, `-minpos`, equal to `-min_positive`.
  //
  // Represented by the bit pattern `0b1111...1`.
  #[inline]
  pub const fn max_negative(format: Format) -> Self {
    Self { format, bits: format.mask() }
  }

  /// One (`1`), the multiplicative identity element.
  //
  // Represented by the bit pattern `0b0100...0`.
  #[inline]
  pub const fn one(format: Format) -> Self {
    Self { format, bits: format.nar_bits() >> 1 }
  }

  /// Negative one (`-1`).
  //
  // Represented by the bit pattern `0b1100...0`.
  #[inline]
  pub const fn minus_one(format: Format) -> Self {
    Self { format, bits: format.nar_bits() | (format.nar_bits() >> 1) }
  }
}
