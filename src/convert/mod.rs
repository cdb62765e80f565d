//! IPv4 format converters.
//!
//! - [`address`] - dotted decimal to hex / binary and back
//! - [`mask`] - subnet mask to CIDR prefix and back
//! - [`network`] - network address of a host under a mask

mod address;
mod mask;
mod network;

pub use address::{address_to_binary, address_to_hex, binary_to_address, hex_to_address};
pub use mask::{cidr_to_mask, is_contiguous_mask, mask_to_cidr, mask_to_cidr_strict};
pub use network::{network, network_address};
