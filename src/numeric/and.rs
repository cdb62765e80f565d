//! Bitwise AND of two binary operands.

use super::base::parse_radix;
use super::nibbles::{format_in_nibbles, strip_spaces};
use crate::error::{Argument, NetcalcError, Result};

const OP: &str = "and_binary";

/// Parse one operand; `None` when it holds no digits at all.
fn parse_operand(input: &str, arg: Argument) -> Result<Option<u64>> {
    if strip_spaces(input).is_empty() {
        return Ok(None);
    }
    parse_radix(OP, input, 2)
        .map(Some)
        .map_err(|e| NetcalcError::argument(OP, arg, e))
}

/// AND two binary strings.
///
/// The result is zero-padded on the left to the longer operand's digit
/// count and nibble grouped. An empty operand yields an empty result, but
/// an invalid operand is reported even when the other one is empty.
///
/// # Examples
/// ```
/// use netcalc::numeric::and_binary;
/// assert_eq!(and_binary("1100", "1010").unwrap(), "1000");
/// assert_eq!(and_binary("110", "10101").unwrap(), "0 0100");
/// ```
pub fn and_binary(bin1: &str, bin2: &str) -> Result<String> {
    let first = parse_operand(bin1, Argument::FirstOperand)?;
    let second = parse_operand(bin2, Argument::SecondOperand)?;

    let (Some(first), Some(second)) = (first, second) else {
        log::trace!("and_binary: empty operand, nothing to compute");
        return Ok(String::new());
    };

    let width = strip_spaces(bin1).len().max(strip_spaces(bin2).len());
    let result = format!("{:0width$b}", first & second);
    log::trace!("and_binary({bin1}, {bin2}) = {result}");

    Ok(format_in_nibbles(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_and_same_width() {
        assert_eq!(and_binary("1100", "1010").unwrap(), "1000");
        assert_eq!(and_binary("1111 0000", "1010 1010").unwrap(), "1010 0000");
    }

    #[test]
    fn test_and_pads_to_longest() {
        assert_eq!(and_binary("110", "10101").unwrap(), "0 0100");
        assert_eq!(and_binary("10101", "110").unwrap(), "0 0100");
        assert_eq!(and_binary("0", "00000000").unwrap(), "0000 0000");
    }

    #[test]
    fn test_and_leading_zeros_keep_width() {
        let long = format!("{}1", "0".repeat(70));
        let result = and_binary(&long, "1").unwrap();
        assert_eq!(result.replace(' ', "").len(), 71);
        assert!(result.ends_with('1'));
    }

    #[test]
    fn test_and_empty_operand() {
        assert_eq!(and_binary("", "1010").unwrap(), "");
        assert_eq!(and_binary("1010", "").unwrap(), "");
        assert_eq!(and_binary("  ", "  ").unwrap(), "");
    }

    #[test]
    fn test_and_invalid_operand() {
        let err = and_binary("12", "1010").unwrap_err();
        assert_eq!(err.argument_name(), Some(Argument::FirstOperand));
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);

        let err = and_binary("1010", "1a").unwrap_err();
        assert_eq!(err.argument_name(), Some(Argument::SecondOperand));

        let err = and_binary("", "2").unwrap_err();
        assert_eq!(err.argument_name(), Some(Argument::SecondOperand));
    }
}
