//! Generic integer base conversion and binary formatting.
//!
//! - [`base`] - decimal / hexadecimal / binary conversion
//! - [`nibbles`] - 4-bit grouping of binary strings
//! - [`and`] - bitwise AND of two binary operands

mod and;
mod base;
mod nibbles;

pub use and::and_binary;
pub use base::{
    binary_to_decimal, binary_to_hex, decimal_to_binary, decimal_to_hex, hex_to_binary,
    hex_to_decimal, parse_decimal, parse_radix,
};
pub use nibbles::{format_in_nibbles, strip_spaces};
