//! Domain models shared by the converters.
//!
//! - [`Ipv4`] - IPv4 network in CIDR notation
//! - address parsing and mask bit helpers

mod ipv4;

// Re-export public types
pub use ipv4::{
    cut_addr, get_cidr_mask, is_contiguous, mask_len, parse_ip, parse_ipv4, Ipv4, MAX_LENGTH,
};
pub(crate) use ipv4::require_ipv4;
