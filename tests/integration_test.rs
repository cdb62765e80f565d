//! Integration tests for netcalc
//!
//! These tests drive the public API the way a front end would.

use netcalc::adapter::{Calculator, Clipboard, InfoFlag};
use netcalc::classify::{classify, is_link_local_unicast, is_loopback, is_multicast, is_private};
use netcalc::convert::{
    address_to_binary, address_to_hex, binary_to_address, cidr_to_mask, hex_to_address,
    mask_to_cidr, network_address,
};
use netcalc::numeric::{and_binary, decimal_to_binary, format_in_nibbles};
use netcalc::{Argument, ErrorKind};
use std::net::Ipv4Addr;

/// Addresses spread over the whole 32 bit space, plus the edges.
fn sample_addresses() -> Vec<Ipv4Addr> {
    let mut addrs: Vec<Ipv4Addr> = (0..=u32::MAX)
        .step_by(16_777_259)
        .map(Ipv4Addr::from)
        .collect();
    addrs.extend([
        Ipv4Addr::UNSPECIFIED,
        Ipv4Addr::BROADCAST,
        Ipv4Addr::LOCALHOST,
        Ipv4Addr::new(192, 168, 1, 10),
    ]);
    addrs
}

#[test]
fn test_address_round_trips() {
    for addr in sample_addresses() {
        let dotted = addr.to_string();

        let bin = address_to_binary(&dotted).expect("valid address");
        assert_eq!(bin.len(), 39, "8 nibbles and 7 spaces for {dotted}");
        assert_eq!(binary_to_address(&bin).unwrap(), dotted);

        let hex = address_to_hex(&dotted).expect("valid address");
        assert_eq!(hex.len(), 8);
        assert_eq!(hex_to_address(&hex).unwrap(), dotted);
    }
}

#[test]
fn test_mask_round_trip_all_prefixes() {
    for n in 0..=32 {
        let cidr = format!("/{n}");
        let mask = cidr_to_mask(&cidr).expect("prefix in range");
        assert_eq!(mask_to_cidr(&mask).unwrap(), cidr);
    }
}

#[test]
fn test_classification_vectors() {
    assert!(is_private("10.1.2.3").unwrap());
    assert!(is_loopback("127.0.0.1").unwrap());
    assert!(is_link_local_unicast("169.254.1.1").unwrap());
    assert!(is_multicast("224.0.0.1").unwrap());

    assert!(!is_private("8.8.8.8").unwrap());
    assert!(!is_loopback("8.8.8.8").unwrap());
    assert!(!is_link_local_unicast("8.8.8.8").unwrap());
    assert!(!is_multicast("8.8.8.8").unwrap());
}

#[test]
fn test_network_address_vector() {
    assert_eq!(
        network_address("192.168.1.10", "255.255.255.0").unwrap(),
        "192.168.1.0/24"
    );
}

#[test]
fn test_discontiguous_mask_has_no_prefix() {
    assert_eq!(mask_to_cidr("255.0.255.0").unwrap(), "/0");
    assert_eq!(
        network_address("10.20.30.40", "255.0.255.0").unwrap(),
        "0.0.0.0/0"
    );
}

#[test]
fn test_and_and_nibble_vectors() {
    assert_eq!(and_binary("1100", "1010").unwrap(), "1000");
    assert_eq!(and_binary("110", "10101").unwrap(), "0 0100");
    assert_eq!(format_in_nibbles("101010"), "10 1010");
}

#[test]
fn test_invalid_inputs_fail() {
    assert_eq!(
        address_to_hex("999.1.1.1").unwrap_err().kind(),
        ErrorKind::InvalidAddress
    );
    assert_eq!(cidr_to_mask("/33").unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(hex_to_address("12").unwrap_err().kind(), ErrorKind::InvalidFormat);

    let err = network_address("192.168.1.300", "255.255.255.0").unwrap_err();
    assert_eq!(err.argument_name(), Some(Argument::Host));
    assert!(err.to_string().starts_with("network_address: host address is invalid"));
}

#[test]
fn test_negative_decimal_is_rejected() {
    assert_eq!(
        decimal_to_binary("-5").unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
}

#[test]
fn test_operations_are_thread_safe() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            std::thread::spawn(move || {
                let addr = format!("10.{i}.0.1");
                let hex = address_to_hex(&addr).unwrap();
                (addr.clone(), hex_to_address(&hex).unwrap(), classify(&addr).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (addr, back, info) = handle.join().expect("thread panicked");
        assert_eq!(addr, back);
        assert!(info.private);
    }
}

struct LastCopy(String);

impl Clipboard for LastCopy {
    fn write_text(&mut self, text: &str) {
        self.0 = text.to_string();
    }
}

#[test]
fn test_calculator_workflow() {
    let mut calc = Calculator::new();
    let mut clipboard = LastCopy(String::new());

    calc.address.dec.edit("172.16.254.1");
    calc.mask.mask.edit("255.255.240.0");
    calc.network.host.edit("172.16.254.1");
    calc.network.mask.edit("255.255.240.0");
    calc.info.ip.edit("172.16.254.1");
    calc.number.dec.edit("4096");
    calc.and.first.edit("1111 0000");
    calc.and.second.edit("1010");
    calc.refresh();

    assert_eq!(calc.address.hex.text(), "AC10FE01");
    assert_eq!(calc.mask.cidr.text(), "/20");
    assert_eq!(calc.network.result, "172.16.240.0/20");
    assert_eq!(calc.info.label(InfoFlag::Private), "true");
    assert_eq!(calc.info.label(InfoFlag::Multicast), "false");
    assert_eq!(calc.number.hex.text(), "1000");
    assert_eq!(calc.number.bin.text(), "1 0000 0000 0000");
    assert_eq!(calc.and.result, "0000 0000");

    calc.network.copy(&mut clipboard);
    assert_eq!(clipboard.0, "172.16.240.0/20");

    // nothing changed, nothing recomputed
    calc.address.hex.set_text("stale");
    calc.refresh();
    assert_eq!(calc.address.hex.text(), "stale");
}
