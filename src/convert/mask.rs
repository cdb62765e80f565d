//! Subnet mask to CIDR prefix length and back.

use std::net::Ipv4Addr;
use std::num::IntErrorKind;

use crate::error::{NetcalcError, Result};
use crate::models::{get_cidr_mask, is_contiguous, mask_len, require_ipv4, MAX_LENGTH};

/// Prefix length of a mask as `"/N"`, N being the count of leading 1-bits.
///
/// Discontiguous masks are accepted but have no prefix length, so
/// `255.0.255.0` gives `"/0"`. See [`mask_to_cidr_strict`] to reject them.
///
/// # Examples
/// ```
/// use netcalc::convert::mask_to_cidr;
/// assert_eq!(mask_to_cidr("255.255.255.0").unwrap(), "/24");
/// ```
pub fn mask_to_cidr(mask: &str) -> Result<String> {
    let ipv4 = require_ipv4("mask_to_cidr", mask)?;
    if !is_contiguous(ipv4) {
        log::debug!("mask_to_cidr: {mask} is not contiguous, using /0");
        return Ok("/0".to_string());
    }
    Ok(format!("/{}", mask_len(ipv4)))
}

/// Like [`mask_to_cidr`] but fails on a discontiguous mask.
pub fn mask_to_cidr_strict(mask: &str) -> Result<String> {
    const OP: &str = "mask_to_cidr_strict";
    let ipv4 = require_ipv4(OP, mask)?;
    if !is_contiguous(ipv4) {
        return Err(NetcalcError::format(
            OP,
            mask,
            "mask bits are not contiguous",
        ));
    }
    Ok(format!("/{}", mask_len(ipv4)))
}

/// Whether `mask` is a run of 1-bits followed by 0-bits.
pub fn is_contiguous_mask(mask: &str) -> Result<bool> {
    Ok(is_contiguous(require_ipv4("is_contiguous_mask", mask)?))
}

/// Dotted-decimal mask for a `"/N"` prefix, N in 0..=32.
///
/// # Examples
/// ```
/// use netcalc::convert::cidr_to_mask;
/// assert_eq!(cidr_to_mask("/20").unwrap(), "255.255.240.0");
/// assert!(cidr_to_mask("/33").is_err());
/// ```
pub fn cidr_to_mask(cidr: &str) -> Result<String> {
    const OP: &str = "cidr_to_mask";
    if cidr.is_empty() {
        return Err(NetcalcError::format(OP, cidr, "value is empty"));
    }
    let number = cidr
        .strip_prefix('/')
        .ok_or_else(|| NetcalcError::format(OP, cidr, "value must start with '/'"))?;

    let len: i64 = number.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            NetcalcError::range(OP, cidr, "prefix length must be between 0 and 32")
        }
        _ => NetcalcError::format(OP, cidr, "missing the number part"),
    })?;

    if len > i64::from(MAX_LENGTH) {
        return Err(NetcalcError::range(OP, cidr, "prefix length is bigger than 32"));
    }
    let len = u8::try_from(len)
        .map_err(|_| NetcalcError::range(OP, cidr, "prefix length is negative"))?;

    let mask = Ipv4Addr::from(get_cidr_mask(len)?).to_string();
    log::trace!("cidr_to_mask({cidr}) = {mask}");
    Ok(mask)
}
