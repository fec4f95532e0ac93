//! Subnetting calculation result types.

use super::class::AddressClass;
use super::mask::SubnetMask;
use serde::Serialize;
use std::net::Ipv4Addr;

/// One enumerated subnet inside the subnetted block.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// 1-based position within the enumeration.
    pub index: u64,
    /// First address of the subnet (not assignable to a host).
    pub network: Ipv4Addr,
    /// Last address of the subnet (not assignable to a host).
    pub broadcast: Ipv4Addr,
    /// `network + 1`.
    pub first_host: Ipv4Addr,
    /// `broadcast - 1`.
    pub last_host: Ipv4Addr,
}

/// Complete output of one subnetting calculation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnettingResult {
    /// Address exactly as the caller supplied it (parsed form).
    pub address: Ipv4Addr,
    /// The caller's address rounded down to its containing network at the
    /// new prefix.
    pub network_address: Ipv4Addr,
    pub class: AddressClass,
    pub default_mask: SubnetMask,
    pub default_prefix: u8,
    pub new_mask: SubnetMask,
    pub new_prefix: u8,
    pub bits_borrowed: u8,
    pub total_subnets: u64,
    pub addresses_per_subnet: u64,
    pub assignable_hosts: u64,
    /// First few subnets (at most 5); empty when the listing policy
    /// suppresses detail for large subnet counts.
    pub subnets: Vec<SubnetDescriptor>,
}

impl SubnettingResult {
    /// Subnets that exist beyond the materialized list.
    pub fn unlisted_subnets(&self) -> u64 {
        self.total_subnets - self.subnets.len() as u64
    }
}
