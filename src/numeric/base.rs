//! Decimal / hexadecimal / binary conversion of unsigned integers.
//!
//! Values are `u64`. Decimal input may carry a `+` sign; negative values
//! are rejected as out of range since network values are unsigned.

use lazy_static::lazy_static;
use regex::Regex;

use super::nibbles::{format_in_nibbles, strip_spaces};
use crate::error::{NetcalcError, Result};

lazy_static! {
    static ref DECIMAL_RE: Regex = Regex::new(r"^([+-]?)([0-9]+)$").expect("Invalid Regex?");
}

/// Parse a decimal integer string.
pub fn parse_decimal(op: &'static str, input: &str) -> Result<u64> {
    let caps = DECIMAL_RE
        .captures(input)
        .ok_or_else(|| NetcalcError::format(op, input, "not a decimal number"))?;
    let digits = &caps[2];

    if &caps[1] == "-" && digits.bytes().any(|b| b != b'0') {
        return Err(NetcalcError::range(
            op,
            input,
            "negative values are not supported",
        ));
    }

    digits
        .parse::<u64>()
        .map_err(|_| NetcalcError::range(op, input, "value does not fit in 64 bits"))
}

/// Parse `input` in base `radix` after removing spaces.
///
/// Only digits of the base are accepted, no sign and no `0x`/`0b` prefix.
pub fn parse_radix(op: &'static str, input: &str, radix: u32) -> Result<u64> {
    let digits = strip_spaces(input);
    if digits.is_empty() {
        return Err(NetcalcError::format(op, input, "no digits"));
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        let reason = match radix {
            2 => "not a binary number",
            16 => "not a hexadecimal number",
            _ => "invalid digit for base",
        };
        return Err(NetcalcError::format(op, input, reason));
    }
    u64::from_str_radix(&digits, radix)
        .map_err(|_| NetcalcError::range(op, input, "value does not fit in 64 bits"))
}

/// Render a decimal string as unpadded binary digits.
///
/// # Examples
/// ```
/// use netcalc::numeric::decimal_to_binary;
/// assert_eq!(decimal_to_binary("10").unwrap(), "1010");
/// assert!(decimal_to_binary("-10").is_err());
/// ```
pub fn decimal_to_binary(dec: &str) -> Result<String> {
    let value = parse_decimal("decimal_to_binary", dec)?;
    log::trace!("decimal_to_binary({dec}) = {value:b}");
    Ok(format!("{value:b}"))
}

/// Render a decimal string as unpadded uppercase hexadecimal digits.
pub fn decimal_to_hex(dec: &str) -> Result<String> {
    let value = parse_decimal("decimal_to_hex", dec)?;
    log::trace!("decimal_to_hex({dec}) = {value:X}");
    Ok(format!("{value:X}"))
}

pub fn hex_to_decimal(hex: &str) -> Result<String> {
    Ok(parse_radix("hex_to_decimal", hex, 16)?.to_string())
}

pub fn binary_to_decimal(bin: &str) -> Result<String> {
    Ok(parse_radix("binary_to_decimal", bin, 2)?.to_string())
}

/// Hexadecimal to binary, nibble grouped.
pub fn hex_to_binary(hex: &str) -> Result<String> {
    let value = parse_radix("hex_to_binary", hex, 16)?;
    Ok(format_in_nibbles(&format!("{value:b}")))
}

pub fn binary_to_hex(bin: &str) -> Result<String> {
    let value = parse_radix("binary_to_hex", bin, 2)?;
    Ok(format!("{value:X}"))
}
