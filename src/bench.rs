//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::posit::{Format, Posit, round_bits};

impl Posit {
  pub fn bench_round_bits(n: u32, image: u64, lost: u64) -> u64 {
    round_bits(n, image, lost)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn posit_decode(format: Format, bits: u64) -> f64 {
  format.decode(bits)
}

#[unsafe(no_mangle)]
pub fn posit_decode_32(bits: u64) -> f64 {
  Format::P32.decode(bits)
}

#[unsafe(no_mangle)]
pub fn posit_encode(format: Format, value: f64) -> u64 {
  format.encode(value)
}

#[unsafe(no_mangle)]
pub fn posit_encode_32(value: f64) -> u64 {
  Format::P32.encode(value)
}

#[unsafe(no_mangle)]
pub fn posit_round_bits_32(image: u64, lost: u64) -> u64 {
  round_bits(32, image, lost)
}

//

#[unsafe(no_mangle)]
pub fn posit_add(x: Posit, y: Posit) -> Result<Posit, crate::PositError> {
  x.try_add(y)
}

#[unsafe(no_mangle)]
pub fn posit_mul(x: Posit, y: Posit) -> Result<Posit, crate::PositError> {
  x.try_mul(y)
}

#[unsafe(no_mangle)]
pub fn posit_div(x: Posit, y: Posit) -> Result<Posit, crate::PositError> {
  x.try_div(y)
}
