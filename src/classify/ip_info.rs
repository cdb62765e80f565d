//! Address range classification for IPv4 and IPv6 literals.
//!
//! IPv4-mapped IPv6 addresses are judged by the rules of the embedded IPv4
//! address.

use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{NetcalcError, Result};
use crate::models::parse_ip;

fn require_ip(op: &'static str, input: &str) -> Result<IpAddr> {
    parse_ip(input)
        .map(|ip| ip.to_canonical())
        .ok_or_else(|| NetcalcError::ip(op, input))
}

fn v4_private(ip: Ipv4Addr) -> bool {
    // RFC 1918
    ip.is_private()
}

fn v6_private(ip: Ipv6Addr) -> bool {
    // RFC 4193 unique local, fc00::/7
    (ip.segments()[0] & 0xfe00) == 0xfc00
}

fn v6_link_local_unicast(ip: Ipv6Addr) -> bool {
    // fe80::/10
    (ip.segments()[0] & 0xffc0) == 0xfe80
}

fn private(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4_private(v4),
        IpAddr::V6(v6) => v6_private(v6),
    }
}

fn link_local_unicast(ip: IpAddr) -> bool {
    match ip {
        // RFC 3927, 169.254.0.0/16
        IpAddr::V4(v4) => v4.is_link_local(),
        IpAddr::V6(v6) => v6_link_local_unicast(v6),
    }
}

/// RFC 1918 (IPv4) or RFC 4193 (IPv6) private address.
///
/// # Examples
/// ```
/// use netcalc::classify::is_private;
/// assert!(is_private("10.1.2.3").unwrap());
/// assert!(!is_private("8.8.8.8").unwrap());
/// ```
pub fn is_private(ip: &str) -> Result<bool> {
    Ok(private(require_ip("is_private", ip)?))
}

/// 127.0.0.0/8 or `::1`.
pub fn is_loopback(ip: &str) -> Result<bool> {
    Ok(require_ip("is_loopback", ip)?.is_loopback())
}

/// 169.254.0.0/16 or fe80::/10.
pub fn is_link_local_unicast(ip: &str) -> Result<bool> {
    Ok(link_local_unicast(require_ip("is_link_local_unicast", ip)?))
}

/// 224.0.0.0/4 or ff00::/8.
pub fn is_multicast(ip: &str) -> Result<bool> {
    Ok(require_ip("is_multicast", ip)?.is_multicast())
}

/// All four classifications of one address.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpInfo {
    pub private: bool,
    pub loopback: bool,
    pub link_local_unicast: bool,
    pub multicast: bool,
}

impl IpInfo {
    pub fn of(ip: IpAddr) -> IpInfo {
        let ip = ip.to_canonical();
        IpInfo {
            private: private(ip),
            loopback: ip.is_loopback(),
            link_local_unicast: link_local_unicast(ip),
            multicast: ip.is_multicast(),
        }
    }
}

/// Parse once and compute every classification.
pub fn classify(ip: &str) -> Result<IpInfo> {
    let info = IpInfo::of(require_ip("classify", ip)?);
    log::trace!("classify({ip}) = {info:?}");
    Ok(info)
}
