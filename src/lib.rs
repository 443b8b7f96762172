//! This crate provides a simple software implementation of
//! [Posit arithmetic](https://posithub.org/docs/posit_standard-2.pdf) where the width and exponent
//! size of a posit are chosen *at runtime*, with bit-exact encoding and decoding.
//!
//! # Introduction
//!
//! Posits are an alternative floating point format proposed by John Gustafson in 2017, with the
//! first published standard in 2022. A posit of `n` bits has a sign bit, a variable-length
//! *regime* field, an exponent field of up to `es` bits, and whatever bits are left as fraction.
//! They have no infinities and a single not-a-real value (NaR), never overflow to NaR and never
//! underflow to zero.
//!
//! The following references are useful if you are not yet familiar with posits:
//!
//!   - [Posit standard](https://posithub.org/docs/posit_standard-2.pdf) (2022)
//!   - [Original extended paper](https://posithub.org/docs/Posits4.pdf) (2017)
//!
//! Here, a [`Posit`] carries its own [`Format`] (the pair `(n, es)`, with `5 ≤ n ≤ 64` and
//! `es ≤ 10`), so posits of different shapes can be created and inspected without any
//! compile-time type per shape. This makes the crate useful for experimenting with formats, for
//! inspecting bit patterns, and as a reference for the encoding itself. Arithmetic is done by
//! decoding to `f64`, computing, and rounding the result back: every posit of 32 bits or fewer
//! with the usual exponent sizes is exactly representable as an `f64`.
//!
//! # Usage
//!
//! ```
//! use dyn_posit::{Format, Posit, PositError};
//!
//! // Create posits of a standard format, or any other, from an f64 or a raw bit representation.
//! let a = Posit::p8(0.015625);
//! let b = Posit::new(Format::P8, 0.5);
//! let c = Posit::from_bits(Format::new(12, 3)?, 0b0110_0000_0000);
//!
//! // Perform arithmetic with the usual operators, within a format.
//! let sum = a + b;
//! assert_eq!(sum.to_bits(), 0b00100001);
//! assert_eq!(sum.value(), 0.515625);
//! assert!((Posit::p8(1.0) / Posit::p8(0.0)).is_nar());
//!
//! // Mixing formats is an error, reported by the `try_*` methods (the operators panic).
//! assert_eq!(
//!   a.try_add(c),
//!   Err(PositError::FormatMismatch { lhs: Format::P8, rhs: Format::new(12, 3)? }),
//! );
//!
//! // Inspect the value or the bits.
//! assert_eq!(c.value(), 256.0);
//! assert_eq!(c.to_bit_string(), "011000000000");
//! assert_eq!(format!("{sum}"), "0.515625");
//! # Ok::<(), PositError>(())
//! ```
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod error;
mod posit;

pub use error::PositError;
pub use posit::{Format, Posit};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x2000} else {0x4_0000};
