//! Pure Rust implementation of unbounded decimal big integers with a
//! streaming digit-by-digit square root engine.
//!
//! # About
//! [`DecUint`] represents a non-negative integer of any magnitude as a
//! normalized sequence of decimal digits and provides schoolbook addition,
//! subtraction, multiplication and ordering that never overflow.
//! [`SqrtStream`] builds on it to emit the decimal digits of a square root
//! one at a time: the integer part first, then fractional digits without
//! bound.
//!
//! ```
//! use decimal_bigint::{DecUint, SqrtStream};
//!
//! let mut sqrt = SqrtStream::new(DecUint::from(2u32));
//! let fractional: String = sqrt.by_ref().take(8).map(char::from).collect();
//!
//! assert_eq!(fractional, "41421356");
//! assert_eq!(sqrt.digits(), "141421356");
//! assert_eq!(sqrt.integer_digits(), 1); // read as 1.41421356…
//! ```
//!
//! # Minimum Supported Rust Version
//! **Rust 1.85** at a minimum.
//!
//! # Goals
//! - Digit-sequence semantics: values are exactly their canonical decimal
//!   digit strings, so every intermediate result of the square-root stream
//!   is observable as printed.
//! - No heap surprises beyond growth: the digit stream is lazy and
//!   pull-based; nothing is precomputed or buffered ahead of demand.
//! - `no_std`-friendly: only `alloc` is required.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod dec_uint;
mod digit;
mod sqrt;

pub use crate::{
    dec_uint::{DecUint, ParseDecimalError},
    digit::Digit,
    sqrt::SqrtStream,
};
