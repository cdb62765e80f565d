//! Network address derivation from a host address and a mask.

use crate::error::{Argument, NetcalcError, Result};
use crate::models::Ipv4;

use super::mask::mask_to_cidr;

const OP: &str = "network_address";

/// Network of `host` under `mask`, as `"network/prefix"` with host bits zeroed.
///
/// Errors are wrapped in [`NetcalcError::Argument`] naming the failing input.
///
/// # Examples
/// ```
/// use netcalc::convert::network_address;
/// assert_eq!(
///     network_address("192.168.1.10", "255.255.255.0").unwrap(),
///     "192.168.1.0/24"
/// );
/// ```
pub fn network_address(host: &str, mask: &str) -> Result<String> {
    network(host, mask).map(|net| net.to_string())
}

/// Typed variant of [`network_address`].
pub fn network(host: &str, mask: &str) -> Result<Ipv4> {
    let suffix = mask_to_cidr(mask).map_err(|e| NetcalcError::argument(OP, Argument::Mask, e))?;
    let cidr = Ipv4::new(&format!("{host}{suffix}"))
        .map_err(|e| NetcalcError::argument(OP, Argument::Host, e))?;
    let net = cidr.network();
    log::trace!("network_address({host}, {mask}) = {net}");
    Ok(net)
}
