//! IP address classification predicates.

mod ip_info;

pub use ip_info::{
    classify, is_link_local_unicast, is_loopback, is_multicast, is_private, IpInfo,
};
