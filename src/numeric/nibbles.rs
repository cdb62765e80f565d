//! Nibble grouping of binary digit strings.

use itertools::Itertools;

/// Remove every space character from `input`.
pub fn strip_spaces(input: &str) -> String {
    input.replace(' ', "")
}

/// Group a binary string into 4-digit nibbles separated by single spaces.
///
/// Existing spaces are ignored. When the length is not a multiple of 4 the
/// short group is the leftmost one.
///
/// # Examples
/// ```
/// use netcalc::numeric::format_in_nibbles;
/// assert_eq!(format_in_nibbles("101010"), "10 1010");
/// assert_eq!(format_in_nibbles("1 0101 0"), "10 1010");
/// assert_eq!(format_in_nibbles("11110000"), "1111 0000");
/// ```
pub fn format_in_nibbles(bin: &str) -> String {
    let digits: Vec<char> = bin.chars().filter(|c| *c != ' ').collect();
    let (head, rest) = digits.split_at(digits.len() % 4);

    let nibbles = rest
        .chunks(4)
        .map(|nibble| nibble.iter().collect::<String>())
        .join(" ");

    match (head.is_empty(), nibbles.is_empty()) {
        (true, _) => nibbles,
        (false, true) => head.iter().collect(),
        (false, false) => format!("{} {nibbles}", head.iter().collect::<String>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_in_nibbles_remainder() {
        assert_eq!(format_in_nibbles("101010"), "10 1010");
        assert_eq!(format_in_nibbles("00100"), "0 0100");
        assert_eq!(format_in_nibbles("1110101010101"), "1 1101 0101 0101");
    }

    #[test]
    fn test_format_in_nibbles_exact() {
        assert_eq!(format_in_nibbles("1010"), "1010");
        assert_eq!(
            format_in_nibbles("11000000101010000000000100001010"),
            "1100 0000 1010 1000 0000 0001 0000 1010"
        );
    }

    #[test]
    fn test_format_in_nibbles_short() {
        assert_eq!(format_in_nibbles(""), "");
        assert_eq!(format_in_nibbles("   "), "");
        assert_eq!(format_in_nibbles("1"), "1");
        assert_eq!(format_in_nibbles("101"), "101");
    }

    #[test]
    fn test_format_in_nibbles_regroups() {
        assert_eq!(format_in_nibbles("10 10 10"), "10 1010");
        assert_eq!(format_in_nibbles("1111 0000 1"), "1 1110 0001");
    }

    #[test]
    fn test_strip_spaces() {
        assert_eq!(strip_spaces(" 1 0 1 "), "101");
        assert_eq!(strip_spaces("\t1"), "\t1");
    }
}
