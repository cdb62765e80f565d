//! IPv4 address, mask and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] network type (address + prefix length) and the bit
//! level helpers the converters are built on.

use serde::{Serialize, Serializer};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use crate::error::{NetcalcError, Result};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse any IP literal, IPv4 or IPv6.
pub fn parse_ip(input: &str) -> Option<IpAddr> {
    input.parse::<IpAddr>().ok()
}

/// Parse a dotted-decimal IPv4 literal.
///
/// IPv4-mapped IPv6 literals (`::ffff:a.b.c.d`) are accepted and unwrapped,
/// any other IPv6 address is rejected.
///
/// # Examples
/// ```
/// use netcalc::models::parse_ipv4;
/// use std::net::Ipv4Addr;
/// assert_eq!(parse_ipv4("10.0.0.1"), Some(Ipv4Addr::new(10, 0, 0, 1)));
/// assert_eq!(parse_ipv4("::ffff:10.0.0.1"), Some(Ipv4Addr::new(10, 0, 0, 1)));
/// assert_eq!(parse_ipv4("fe80::1"), None);
/// ```
pub fn parse_ipv4(input: &str) -> Option<Ipv4Addr> {
    match parse_ip(input)? {
        IpAddr::V4(addr) => Some(addr),
        IpAddr::V6(addr) => addr.to_ipv4_mapped(),
    }
}

/// Like [`parse_ipv4`] but reports failure as an error of operation `op`.
pub(crate) fn require_ipv4(op: &'static str, input: &str) -> Result<Ipv4Addr> {
    parse_ipv4(input).ok_or_else(|| NetcalcError::ipv4(op, input))
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netcalc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(NetcalcError::range(
            "get_cidr_mask",
            &len.to_string(),
            "network length is too long",
        ))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Number of leading 1-bits of a mask.
///
/// Contiguity is not checked here, `255.0.255.0` gives 8.
pub fn mask_len(mask: Ipv4Addr) -> u8 {
    u32::from(mask).leading_ones() as u8
}

/// True when the mask is a run of 1s followed only by 0s.
pub fn is_contiguous(mask: Ipv4Addr) -> bool {
    let bits = u32::from(mask);
    bits.leading_ones() + bits.trailing_zeros() == u32::from(MAX_LENGTH)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// IPv4 network in CIDR notation.
#[derive(Eq, Ord, PartialOrd, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The address keeps its host bits; use [`Ipv4::network`] to clear them.
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        const OP: &str = "parse_cidr";
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| NetcalcError::format(OP, addr_cidr, "expected address/prefix"))?;
        let addr = require_ipv4(OP, addr)?;
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NetcalcError::format(OP, addr_cidr, "prefix is not a number"));
        }
        let mask: u8 = mask
            .parse()
            .map_err(|_| NetcalcError::range(OP, addr_cidr, "network length is too long"))?;
        if mask > MAX_LENGTH {
            return Err(NetcalcError::range(OP, addr_cidr, "network length is too long"));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The same network with all host bits zeroed.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        // fields are public, clamp an out of range mask
        cut_addr(self.addr, self.mask.min(MAX_LENGTH)).unwrap_or(self.addr)
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
