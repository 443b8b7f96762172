use super::*;

impl Posit {
  /// Construct a posit of the given format holding `value`, rounded to the nearest posit (see
  /// [`Format::encode`]).
  #[inline]
  pub fn new(format: Format, value: f64) -> Self {
    Self { format, bits: format.encode(value) }
  }

  /// As [`Self::new`], but taking the width `n` and exponent size `es` directly. Fails with
  /// [`PositError::InvalidConstruction`] if they don't form a valid [`Format`].
  pub fn try_new(n: u32, es: u32, value: f64) -> Result<Self, PositError> {
    Ok(Self::new(Format::new(n, es)?, value))
  }

  /// An 8-bit posit with no exponent bits ([`Format::P8`]) holding `value`, rounded.
  #[inline]
  pub fn p8(value: f64) -> Self {
    Self::new(Format::P8, value)
  }

  /// A 16-bit posit with 1 exponent bit ([`Format::P16`]) holding `value`, rounded.
  #[inline]
  pub fn p16(value: f64) -> Self {
    Self::new(Format::P16, value)
  }

  /// A 32-bit posit with 2 exponent bits ([`Format::P32`]) holding `value`, rounded.
  #[inline]
  pub fn p32(value: f64) -> Self {
    Self::new(Format::P32, value)
  }

  /// Construct a posit from its raw bit representation. Bits higher (more significant) than the
  /// lowest `n` bits, if any, are ignored; there is no sign extension.
  #[inline]
  pub const fn from_bits(format: Format, bits: u64) -> Self {
    Self { format, bits: bits & format.mask() }
  }

  /// Return the underlying bit representation of `self`, in the lowest `n` bits of a `u64` (the
  /// higher bits are always `0`).
  #[inline]
  pub const fn to_bits(self) -> u64 {
    self.bits
  }

  /// Replace the bit representation of `self`, masked to the lowest `n` bits as in
  /// [`Self::from_bits`].
  #[inline]
  pub fn set_bits(&mut self, bits: u64) {
    self.bits = bits & self.format.mask();
  }

  /// The value of `self`, decoded exactly as an `f64` (see [`Format::decode`]). NaR decodes to
  /// NaN.
  #[inline]
  pub fn value(self) -> f64 {
    self.format.decode(self.bits)
  }

  /// Replace the value of `self`, rounding `value` to the nearest posit of `self`'s format (see
  /// [`Format::encode`]).
  #[inline]
  pub fn set_value(&mut self, value: f64) {
    self.bits = self.format.encode(value);
  }

  /// The format of `self`.
  #[inline]
  pub const fn format(self) -> Format {
    self.format
  }

  /// The total width of `self` in bits (i.e. [`Format::n`]).
  #[inline]
  pub const fn bit_len(self) -> u32 {
    self.format.n()
  }

  /// Whether `self` is the NaR (not-a-real) bit pattern.
  #[inline]
  pub const fn is_nar(self) -> bool {
    self.bits == self.format.nar_bits()
  }

  /// Whether `self` is zero.
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.bits == 0
  }
}
