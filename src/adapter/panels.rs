//! Interaction state for each calculator group.
//!
//! Each panel owns its [`Field`]s and a `refresh` that reacts to user edits
//! by calling into the engine and updating dependent fields. Failing input
//! marks its field invalid and clears the dependents.

use crate::classify::{classify, IpInfo};
use crate::convert::{
    address_to_binary, address_to_hex, binary_to_address, cidr_to_mask, hex_to_address,
    mask_to_cidr, network_address,
};
use crate::error::{Argument, Result};
use crate::numeric::{
    and_binary, binary_to_decimal, binary_to_hex, decimal_to_binary, decimal_to_hex,
    format_in_nibbles, hex_to_binary, hex_to_decimal, parse_radix, strip_spaces,
};

use super::field::Field;

/// Destination of "copy result" actions, implemented by the front end.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

fn value_or_empty(result: Result<String>) -> (String, bool) {
    match result {
        Ok(value) => (value, false),
        Err(e) => {
            log::debug!("{e}");
            (String::new(), true)
        }
    }
}

/// Dotted decimal / hex / binary view of one IPv4 address.
#[derive(Debug, Default, Clone)]
pub struct AddressPanel {
    pub dec: Field,
    pub hex: Field,
    pub bin: Field,
}

impl AddressPanel {
    pub fn refresh(&mut self) {
        if self.dec.changed() {
            let (hex, invalid) = value_or_empty(address_to_hex(self.dec.text()));
            let (bin, _) = value_or_empty(address_to_binary(self.dec.text()));
            self.hex.set_text(hex);
            self.bin.set_text(bin);
            self.dec.invalid = invalid;
        }

        if self.hex.changed() {
            let (dec, invalid) = value_or_empty(hex_to_address(self.hex.text()));
            let (bin, _) = value_or_empty(address_to_binary(&dec));
            self.dec.set_text(dec);
            self.bin.set_text(bin);
            self.hex.invalid = invalid;
        }

        if self.bin.changed() {
            let (dec, invalid) = value_or_empty(binary_to_address(self.bin.text()));
            let (hex, _) = value_or_empty(address_to_hex(&dec));
            self.dec.set_text(dec);
            self.hex.set_text(hex);
            self.bin.invalid = invalid;
        }
    }
}

/// Network mask and CIDR slash value.
#[derive(Debug, Default, Clone)]
pub struct MaskPanel {
    pub mask: Field,
    pub cidr: Field,
}

impl MaskPanel {
    pub fn refresh(&mut self) {
        if self.mask.changed() {
            let (cidr, invalid) = value_or_empty(mask_to_cidr(self.mask.text()));
            self.cidr.set_text(cidr);
            self.mask.invalid = invalid;
        }

        if self.cidr.changed() {
            let (mask, invalid) = value_or_empty(cidr_to_mask(self.cidr.text()));
            self.mask.set_text(mask);
            self.cidr.invalid = invalid;
        }
    }
}

/// Host address and mask, giving the network address.
#[derive(Debug, Default, Clone)]
pub struct NetworkPanel {
    pub host: Field,
    pub mask: Field,
    pub result: String,
}

impl NetworkPanel {
    pub fn refresh(&mut self) {
        let host_changed = self.host.changed();
        let mask_changed = self.mask.changed();
        if !host_changed && !mask_changed {
            return;
        }

        self.host.invalid = false;
        self.mask.invalid = false;
        self.result.clear();
        if self.host.text().is_empty() || self.mask.text().is_empty() {
            return;
        }

        match network_address(self.host.text(), self.mask.text()) {
            Ok(net) => self.result = net,
            Err(e) => {
                log::debug!("{e}");
                match e.argument_name() {
                    Some(Argument::Mask) => self.mask.invalid = true,
                    _ => self.host.invalid = true,
                }
            }
        }
    }

    pub fn copy(&self, clipboard: &mut dyn Clipboard) {
        clipboard.write_text(&self.result);
    }
}

/// One of the four flags shown by [`InfoPanel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoFlag {
    Private,
    Loopback,
    LinkLocalUnicast,
    Multicast,
}

/// IP address classification.
#[derive(Debug, Default, Clone)]
pub struct InfoPanel {
    pub ip: Field,
    pub info: IpInfo,
}

impl InfoPanel {
    pub fn refresh(&mut self) {
        if self.ip.changed() {
            match classify(self.ip.text()) {
                Ok(info) => {
                    self.info = info;
                    self.ip.invalid = false;
                }
                Err(e) => {
                    log::debug!("{e}");
                    self.info = IpInfo::default();
                    self.ip.invalid = true;
                }
            }
        }
    }

    /// `"true"` / `"false"`, or empty while no address is entered.
    pub fn label(&self, flag: InfoFlag) -> String {
        if self.ip.text().is_empty() {
            return String::new();
        }
        let value = match flag {
            InfoFlag::Private => self.info.private,
            InfoFlag::Loopback => self.info.loopback,
            InfoFlag::LinkLocalUnicast => self.info.link_local_unicast,
            InfoFlag::Multicast => self.info.multicast,
        };
        value.to_string()
    }

    pub fn copy(&self, flag: InfoFlag, clipboard: &mut dyn Clipboard) {
        clipboard.write_text(&self.label(flag));
    }
}

/// Decimal / hex / binary view of an unsigned integer.
#[derive(Debug, Default, Clone)]
pub struct NumberPanel {
    pub dec: Field,
    pub hex: Field,
    pub bin: Field,
}

impl NumberPanel {
    pub fn refresh(&mut self) {
        if self.dec.changed() {
            let dec = self.dec.text().trim().to_string();
            let (hex, invalid) = value_or_empty(decimal_to_hex(&dec));
            let (bin, _) = value_or_empty(decimal_to_binary(&dec));
            self.hex.set_text(hex);
            self.bin.set_text(format_in_nibbles(&bin));
            self.dec.invalid = invalid;
        }

        if self.hex.changed() {
            let (dec, invalid) = value_or_empty(hex_to_decimal(self.hex.text()));
            let (bin, _) = value_or_empty(hex_to_binary(self.hex.text()));
            self.dec.set_text(dec);
            self.bin.set_text(bin);
            self.hex.invalid = invalid;
        }

        if self.bin.changed() {
            let (dec, invalid) = value_or_empty(binary_to_decimal(self.bin.text()));
            let (hex, _) = value_or_empty(binary_to_hex(self.bin.text()));
            self.dec.set_text(dec);
            self.hex.set_text(hex);
            self.bin.invalid = invalid;
        }
    }
}

/// Bitwise AND of two binary operands.
#[derive(Debug, Default, Clone)]
pub struct AndPanel {
    pub first: Field,
    pub second: Field,
    pub result: String,
}

fn operand_invalid(field: &Field) -> bool {
    !strip_spaces(field.text()).is_empty() && parse_radix("and_binary", field.text(), 2).is_err()
}

impl AndPanel {
    pub fn refresh(&mut self) {
        let first_changed = self.first.changed();
        let second_changed = self.second.changed();
        if !first_changed && !second_changed {
            return;
        }

        self.first.invalid = operand_invalid(&self.first);
        self.second.invalid = operand_invalid(&self.second);
        self.result = and_binary(self.first.text(), self.second.text()).unwrap_or_default();
    }

    pub fn copy(&self, clipboard: &mut dyn Clipboard) {
        clipboard.write_text(&self.result);
    }
}

/// All six groups of the calculator.
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    pub address: AddressPanel,
    pub mask: MaskPanel,
    pub network: NetworkPanel,
    pub info: InfoPanel,
    pub number: NumberPanel,
    pub and: AndPanel,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator::default()
    }

    /// Refresh every panel, typically once per frame.
    pub fn refresh(&mut self) {
        self.address.refresh();
        self.mask.refresh();
        self.network.refresh();
        self.info.refresh();
        self.number.refresh();
        self.and.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard(Vec<String>);

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    #[test]
    fn test_address_panel_from_dec() {
        let mut panel = AddressPanel::default();
        panel.dec.edit("192.168.1.10");
        panel.refresh();
        assert_eq!(panel.hex.text(), "C0A8010A");
        assert_eq!(panel.bin.text(), "1100 0000 1010 1000 0000 0001 0000 1010");
        assert!(!panel.dec.invalid);
    }

    #[test]
    fn test_address_panel_from_hex_and_bin() {
        let mut panel = AddressPanel::default();
        panel.hex.edit("0A000001");
        panel.refresh();
        assert_eq!(panel.dec.text(), "10.0.0.1");
        assert_eq!(panel.bin.text(), "0000 1010 0000 0000 0000 0000 0000 0001");

        panel.bin.edit("11111111 11111111 11111111 00000000");
        panel.refresh();
        assert_eq!(panel.dec.text(), "255.255.255.0");
        assert_eq!(panel.hex.text(), "FFFFFF00");
    }

    #[test]
    fn test_address_panel_invalid_clears_dependents() {
        let mut panel = AddressPanel::default();
        panel.dec.edit("10.0.0.1");
        panel.refresh();
        panel.hex.edit("12");
        panel.refresh();
        assert!(panel.hex.invalid);
        assert!(panel.hex.show_invalid());
        assert_eq!(panel.dec.text(), "");
        assert_eq!(panel.bin.text(), "");
    }

    #[test]
    fn test_mask_panel() {
        let mut panel = MaskPanel::default();
        panel.mask.edit("255.255.0.0");
        panel.refresh();
        assert_eq!(panel.cidr.text(), "/16");

        panel.cidr.edit("/33");
        panel.refresh();
        assert!(panel.cidr.invalid);
        assert_eq!(panel.mask.text(), "");
    }

    #[test]
    fn test_network_panel() {
        let mut panel = NetworkPanel::default();
        let mut clipboard = MemoryClipboard::default();

        panel.host.edit("192.168.1.10");
        panel.refresh();
        assert_eq!(panel.result, "");

        panel.mask.edit("255.255.255.0");
        panel.refresh();
        assert_eq!(panel.result, "192.168.1.0/24");

        panel.copy(&mut clipboard);
        assert_eq!(clipboard.0, vec!["192.168.1.0/24".to_string()]);

        panel.mask.edit("255.255");
        panel.refresh();
        assert!(panel.mask.invalid);
        assert!(!panel.host.invalid);
        assert_eq!(panel.result, "");
    }

    #[test]
    fn test_info_panel() {
        let mut panel = InfoPanel::default();
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(panel.label(InfoFlag::Private), "");

        panel.ip.edit("127.0.0.1");
        panel.refresh();
        assert_eq!(panel.label(InfoFlag::Loopback), "true");
        assert_eq!(panel.label(InfoFlag::Private), "false");
        panel.copy(InfoFlag::Loopback, &mut clipboard);
        assert_eq!(clipboard.0, vec!["true".to_string()]);

        panel.ip.edit("not an ip");
        panel.refresh();
        assert!(panel.ip.invalid);
        assert_eq!(panel.label(InfoFlag::Loopback), "false");
    }

    #[test]
    fn test_number_panel() {
        let mut panel = NumberPanel::default();
        panel.dec.edit(" 42 ");
        panel.refresh();
        assert_eq!(panel.hex.text(), "2A");
        assert_eq!(panel.bin.text(), "10 1010");

        panel.hex.edit("FF");
        panel.refresh();
        assert_eq!(panel.dec.text(), "255");
        assert_eq!(panel.bin.text(), "1111 1111");

        panel.bin.edit("1 0000");
        panel.refresh();
        assert_eq!(panel.dec.text(), "16");
        assert_eq!(panel.hex.text(), "10");

        panel.dec.edit("-1");
        panel.refresh();
        assert!(panel.dec.invalid);
        assert_eq!(panel.hex.text(), "");
        assert_eq!(panel.bin.text(), "");
    }

    #[test]
    fn test_and_panel() {
        let mut panel = AndPanel::default();
        let mut clipboard = MemoryClipboard::default();

        panel.first.edit("110");
        panel.second.edit("10101");
        panel.refresh();
        assert_eq!(panel.result, "0 0100");
        panel.copy(&mut clipboard);
        assert_eq!(clipboard.0, vec!["0 0100".to_string()]);

        panel.first.edit("12");
        panel.second.edit("3");
        panel.refresh();
        assert!(panel.first.invalid);
        assert!(panel.second.invalid);
        assert_eq!(panel.result, "");

        panel.first.edit("");
        panel.second.edit("1");
        panel.refresh();
        assert!(!panel.first.invalid);
        assert!(!panel.second.invalid);
        assert_eq!(panel.result, "");
    }

    #[test]
    fn test_calculator_refresh() {
        let mut calc = Calculator::new();
        calc.address.dec.edit("10.0.0.1");
        calc.mask.cidr.edit("/8");
        calc.refresh();
        assert_eq!(calc.address.hex.text(), "0A000001");
        assert_eq!(calc.mask.mask.text(), "255.0.0.0");
        assert_eq!(calc.and.result, "");
    }
}
