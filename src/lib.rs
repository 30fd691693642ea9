//! base-convert: Arbitrary-Base Conversion Library
//!
//! Converts numerals between positional bases 2-62 (or any custom digit
//! alphabet) with arbitrary-precision integers, sign and case handling,
//! and an optional derivation trace.

pub mod cli;
pub mod converter;
pub mod utils;

pub use converter::{ConversionError, ConversionOptions, ConversionResult, Converter};
