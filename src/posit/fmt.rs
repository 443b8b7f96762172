use super::*;

use core::fmt::{Binary, Debug, Display, Formatter, Result};

impl Display for Format {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "posit<{}, {}>", self.n, self.es)
  }
}

impl Debug for Posit {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let bits = self.bits;
    f.debug_struct("Posit")
      .field("n", &self.format.n)
      .field("es", &self.format.es)
      .field("bits", &format_args!("0b{bits:0w$b}", w=self.format.n as usize))
      .finish()
  }
}

/// The value of the posit, formatted as an `f64` (so that e.g. precision flags apply), or `NaR`.
impl Display for Posit {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    if self.is_nar() {
      f.pad("NaR")
    } else {
      Display::fmt(&self.value(), f)
    }
  }
}

/// The `n`-bit pattern, zero-padded to `n` characters. The alternate flag (`{:#b}`) adds a `0b`
/// prefix.
impl Binary for Posit {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let bits = self.bits;
    let w = self.format.n as usize;
    if f.alternate() {
      write!(f, "0b{bits:0w$b}")
    } else {
      write!(f, "{bits:0w$b}")
    }
  }
}

impl Posit {
  /// The bit pattern of `self` as a string of exactly `n` `'0'`s and `'1'`s, most significant bit
  /// first.
  ///
  /// ```
  /// # use dyn_posit::Posit;
  /// assert_eq!(Posit::p8(0.515625).to_bit_string(), "00100001");
  /// ```
  pub fn to_bit_string(self) -> String {
    format!("{self:b}")
  }
}
