//! IPv4 address parsing and bit-level subnet helpers.
//!
//! Addresses are [`Ipv4Addr`] throughout; the helpers here do the mask and
//! boundary arithmetic on the u32 form.

use crate::error::SubnetError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Parse a dotted-decimal IPv4 string.
///
/// Requires exactly four numeric fields, each in 0-255. Surrounding
/// whitespace is trimmed; no other normalization happens. The error names
/// the field that failed.
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let trimmed = text.trim();
    let invalid = |reason: String| SubnetError::InvalidAddress {
        input: trimmed.to_string(),
        reason,
    };

    let fields: Vec<&str> = trimmed.split('.').collect();
    if fields.len() != 4 {
        return Err(invalid(format!("expected 4 octets, found {}", fields.len())));
    }

    let mut octets = [0u8; 4];
    for (i, field) in fields.iter().enumerate() {
        let value: u32 = field
            .parse()
            .map_err(|_| invalid(format!("octet {} ({:?}) is not a number", i + 1, field)))?;
        if value > 255 {
            return Err(invalid(format!(
                "octet {} ({}) is out of range 0-255",
                i + 1,
                value
            )));
        }
        octets[i] = value as u8;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// `prefix` ones followed by `32 - prefix` zeros. Callers pass prefixes
/// already validated to be at most [`MAX_PREFIX`].
pub fn cidr_mask(prefix: u8) -> u32 {
    assert!(prefix <= MAX_PREFIX, "prefix exceeds 32 bits");
    let right_len = MAX_PREFIX - prefix;
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Network address for a given IP and prefix length.
///
/// Any address is rounded down to its containing network; input does not
/// have to be network-aligned already.
pub fn network_addr(addr: Ipv4Addr, prefix: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & cidr_mask(prefix))
}

/// Broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, prefix: u8) -> Ipv4Addr {
    let mask = cidr_mask(prefix);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}
