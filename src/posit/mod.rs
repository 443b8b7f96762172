//! This module and its submodules contain a software implementation of the Posit floating point
//! format, where the width `n` and the exponent size `es` are chosen at runtime rather than fixed
//! in the type.
//!
//! The implementation is deliberately simple: a posit is *decoded* into an `f64`, the arithmetic
//! is done on that `f64`, and the result is *encoded* (rounded) back into a posit of the same
//! format. For every posit up to 32 bits wide (with the usual exponent sizes), every value is
//! exactly representable as an `f64`, so decoding is exact and encoding does all the rounding.
//!
//! If you know nothing about Posits and want to learn more, a good place to start is
//! <https://posithub.org/docs/Posits4.pdf>.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit n-1**: numbered least significant to most significant, starts at 0.
//!   - **Image**: a posit bit pattern left-aligned in a 64-bit register, with as many bits of
//!     precision below the `n`th bit as we have.

use crate::PositError;

/// The shape of a posit: its total width `n` in bits, and the width `es` of its exponent field.
///
/// A `Format` is always valid once constructed (see [`Format::new`]).
///
/// ```
/// # use dyn_posit::Format;
/// let f = Format::new(16, 1).unwrap();
/// assert_eq!(f, Format::P16);
/// assert!(Format::new(4, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub struct Format {
  n: u32,
  es: u32,
}

/// A posit number: a [`Format`] plus a bit pattern of [`Format::n`] bits.
///
/// Two posits are equal if and only if they have the same format and the same bit pattern. In
/// particular, [NaR](Posit::nar) *is* equal to itself (unlike an IEEE NaN).
///
/// ```
/// # use dyn_posit::Posit;
/// let a = Posit::p8(0.015625);
/// let b = Posit::p8(0.5);
/// assert_eq!((a + b).to_bits(), 0b00100001);
/// assert_eq!((a + b).value(), 0.515625);
/// ```
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct Posit {
  format: Format,
  bits: u64,
}

/// Format validation, derived quantities, and the format guard
mod format;

/// Exact powers of two
mod exp2i;
pub(crate) use exp2i::exp2i;

/// Constants (zero, NaR, max, min_positive, etc)
mod consts;

/// Basics: constructors, raw bits, value
mod basics;

/// Bit pattern → value
mod decode;

/// Value → bit pattern, and rounding
mod encode;
#[cfg(feature = "bench")]
pub(crate) use encode::round_bits;

/// Comparisons and conversions
mod traits;

/// Negation, abs, next/prior
mod unary;

/// Arithmetic operators
mod ops;

/// Square root and elementary functions
mod math;

/// Debug, Display, Binary
mod fmt;


/// Exact rational oracle, for tests
#[cfg(test)]
mod rational;
