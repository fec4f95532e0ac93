//! Contiguous subnet masks derived from a CIDR prefix length.

use super::ipv4::{cidr_mask, MAX_PREFIX};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// A subnet mask of `prefix` one bits followed by `32 - prefix` zero bits.
///
/// Only contiguous masks exist; the type carries the prefix and derives the
/// u32, dotted-decimal, and binary-grouped forms from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetMask {
    prefix: u8,
}

impl SubnetMask {
    pub fn from_prefix(prefix: u8) -> SubnetMask {
        assert!(prefix <= MAX_PREFIX, "prefix exceeds 32 bits");
        SubnetMask { prefix }
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn as_u32(&self) -> u32 {
        cidr_mask(self.prefix)
    }

    pub fn octets(&self) -> [u8; 4] {
        self.as_u32().to_be_bytes()
    }

    /// Dotted-decimal form, e.g. `255.255.255.192` for /26.
    pub fn dotted(&self) -> String {
        self.octets().iter().join(".")
    }

    /// Four 8-bit groups, e.g. `11111111.11111111.11111111.11000000`.
    pub fn binary_grouped(&self) -> String {
        self.octets().iter().map(|octet| format!("{octet:08b}")).join(".")
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.dotted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_forms() {
        assert_eq!(SubnetMask::from_prefix(8).dotted(), "255.0.0.0");
        assert_eq!(SubnetMask::from_prefix(16).dotted(), "255.255.0.0");
        assert_eq!(SubnetMask::from_prefix(20).dotted(), "255.255.240.0");
        assert_eq!(SubnetMask::from_prefix(24).dotted(), "255.255.255.0");
        assert_eq!(SubnetMask::from_prefix(26).dotted(), "255.255.255.192");
        assert_eq!(SubnetMask::from_prefix(30).dotted(), "255.255.255.252");
    }

    #[test]
    fn test_binary_grouped() {
        assert_eq!(
            SubnetMask::from_prefix(26).binary_grouped(),
            "11111111.11111111.11111111.11000000"
        );
        assert_eq!(
            SubnetMask::from_prefix(8).binary_grouped(),
            "11111111.00000000.00000000.00000000"
        );
    }

    #[test]
    fn test_mask_round_trip() {
        // The binary form must be exactly `prefix` ones then zeros, for
        // every prefix a class A/B/C network can legally be subnetted to.
        for prefix in 9..=30u8 {
            let mask = SubnetMask::from_prefix(prefix);
            let bits: String = mask.binary_grouped().split('.').collect();
            let ones = bits.chars().take_while(|c| *c == '1').count();
            let zeros = bits.chars().skip(ones).filter(|c| *c == '0').count();
            assert_eq!(ones, prefix as usize, "ones mismatch at /{prefix}");
            assert_eq!(zeros, 32 - prefix as usize, "zeros mismatch at /{prefix}");
            assert_eq!(bits.len(), 32);
        }
    }
}
