//! Dotted-decimal IPv4 to hexadecimal / binary and back.

use std::net::Ipv4Addr;

use crate::error::{NetcalcError, Result};
use crate::models::require_ipv4;
use crate::numeric::{format_in_nibbles, strip_spaces};

/// Render an IPv4 address as 8 uppercase hex digits, 2 per octet.
///
/// # Examples
/// ```
/// use netcalc::convert::address_to_hex;
/// assert_eq!(address_to_hex("192.168.1.1").unwrap(), "C0A80101");
/// assert!(address_to_hex("999.1.1.1").is_err());
/// ```
pub fn address_to_hex(addr: &str) -> Result<String> {
    let ipv4 = require_ipv4("address_to_hex", addr)?;
    let hex = format!("{:08X}", u32::from(ipv4));
    log::trace!("address_to_hex({addr}) = {hex}");
    Ok(hex)
}

/// Render an IPv4 address as 32 bits in 8 space separated nibbles.
pub fn address_to_binary(addr: &str) -> Result<String> {
    let ipv4 = require_ipv4("address_to_binary", addr)?;
    let bin = format_in_nibbles(&format!("{:032b}", u32::from(ipv4)));
    log::trace!("address_to_binary({addr}) = {bin}");
    Ok(bin)
}

/// Strip spaces and check `input` is exactly `len` digits of base `radix`.
fn fixed_digits(op: &'static str, input: &str, len: usize, radix: u32) -> Result<u32> {
    let digits = strip_spaces(input);
    if digits.chars().count() != len {
        let reason = match radix {
            2 => "expected exactly 32 binary digits",
            _ => "expected exactly 8 hexadecimal digits",
        };
        return Err(NetcalcError::format(op, input, reason));
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        let reason = match radix {
            2 => "only 0 and 1 are allowed",
            _ => "only hexadecimal digits are allowed",
        };
        return Err(NetcalcError::format(op, input, reason));
    }
    // length and digits are checked, so this cannot overflow
    u32::from_str_radix(&digits, radix).map_err(|_| NetcalcError::format(op, input, "unparsable"))
}

/// Parse a 32 bit binary string (spaces optional) into dotted decimal.
///
/// # Examples
/// ```
/// use netcalc::convert::binary_to_address;
/// let bin = "1100 0000 1010 1000 0000 0001 0000 0001";
/// assert_eq!(binary_to_address(bin).unwrap(), "192.168.1.1");
/// ```
pub fn binary_to_address(bin: &str) -> Result<String> {
    let bits = fixed_digits("binary_to_address", bin, 32, 2)?;
    let addr = Ipv4Addr::from(bits).to_string();
    log::trace!("binary_to_address({bin}) = {addr}");
    Ok(addr)
}

/// Parse an 8 digit hex string (spaces optional) into dotted decimal.
pub fn hex_to_address(hex: &str) -> Result<String> {
    let bits = fixed_digits("hex_to_address", hex, 8, 16)?;
    let addr = Ipv4Addr::from(bits).to_string();
    log::trace!("hex_to_address({hex}) = {addr}");
    Ok(addr)
}
