//! Legacy address-class identification (RFC 791 classful ranges).

use super::mask::SubnetMask;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::ops::RangeInclusive;

/// Legacy IPv4 address class, derived from the first octet only.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    A,
    B,
    C,
    /// 224-239, multicast.
    D,
    /// 240-254, experimental.
    E,
    /// First octet 0 (network identifier), 127 (loopback), or 255
    /// (broadcast-reserved); not classifiable for this tool.
    Invalid,
}

/// Ordered (first-octet range, class) table; first match wins, anything
/// unmatched is [`AddressClass::Invalid`].
const CLASS_RANGES: [(RangeInclusive<u8>, AddressClass); 5] = [
    (1..=126, AddressClass::A),
    (128..=191, AddressClass::B),
    (192..=223, AddressClass::C),
    (224..=239, AddressClass::D),
    (240..=254, AddressClass::E),
];

impl AddressClass {
    /// Classify an address by its first octet. Total over all addresses.
    pub fn of(addr: Ipv4Addr) -> AddressClass {
        let first = addr.octets()[0];
        CLASS_RANGES
            .iter()
            .find(|(range, _)| range.contains(&first))
            .map(|(_, class)| *class)
            .unwrap_or(AddressClass::Invalid)
    }

    /// Default CIDR prefix for the class; `None` where subnetting is not
    /// defined (D, E, Invalid).
    pub fn default_prefix(&self) -> Option<u8> {
        match self {
            AddressClass::A => Some(8),
            AddressClass::B => Some(16),
            AddressClass::C => Some(24),
            _ => None,
        }
    }

    /// Default subnet mask for the class, derived from the default prefix.
    pub fn default_mask(&self) -> Option<SubnetMask> {
        self.default_prefix().map(SubnetMask::from_prefix)
    }

    pub fn is_subnettable(&self) -> bool {
        self.default_prefix().is_some()
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D (Multicast)",
            AddressClass::E => "E (Experimental)",
            AddressClass::Invalid => "Invalid",
        };
        write!(f, "{tag}")
    }
}
