//! Subnet counting and bounded range enumeration.

use crate::models::subnet::SubnetDescriptor;
use std::net::Ipv4Addr;

/// At most this many subnet descriptors are materialized per calculation.
pub const SUBNET_LIST_LIMIT: u64 = 5;

/// Above this many subnets, only aggregate counts are reported and no
/// descriptors are materialized. Keeps class A/B low-prefix requests from
/// enumerating millions of subnets.
pub const DETAIL_LISTING_MAX: u64 = 20;

/// Number of subnets created by borrowing `bits_borrowed` bits.
pub fn total_subnets(bits_borrowed: u8) -> u64 {
    1u64 << bits_borrowed
}

/// Total addresses in one subnet of the given prefix, network and
/// broadcast included.
pub fn addresses_per_subnet(new_prefix: u8) -> u64 {
    1u64 << (32 - u32::from(new_prefix))
}

/// Host-assignable addresses per subnet. Saturates at 0 so tiny subnets
/// never underflow, although the /30 ceiling keeps this at 2 or more for
/// every legal prefix.
pub fn assignable_hosts(new_prefix: u8) -> u64 {
    addresses_per_subnet(new_prefix).saturating_sub(2)
}

/// Enumerate the first `min(limit, total)` subnets starting at `base`.
///
/// `base` is the network-aligned start of the block and `per_subnet` the
/// subnet size in addresses; subnet `i` spans
/// `base + i * per_subnet ..= base + (i + 1) * per_subnet - 1`. Pure and
/// restartable: identical inputs produce identical output.
pub fn enumerate(
    base: Ipv4Addr,
    total: u64,
    per_subnet: u64,
    limit: u64,
) -> Vec<SubnetDescriptor> {
    let base_bits = u64::from(u32::from(base));
    let count = total.min(limit);

    let mut subnets = Vec::with_capacity(count as usize);
    for i in 0..count {
        let start = base_bits + i * per_subnet;
        let end = start + per_subnet - 1;
        // start..=end stays inside the containing classful block, which
        // itself ends below 2^32; the casts cannot truncate.
        subnets.push(SubnetDescriptor {
            index: i + 1,
            network: Ipv4Addr::from(start as u32),
            broadcast: Ipv4Addr::from(end as u32),
            first_host: Ipv4Addr::from((start + 1) as u32),
            last_host: Ipv4Addr::from((end - 1) as u32),
        });
    }
    subnets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(total_subnets(2), 4);
        assert_eq!(total_subnets(4), 16);
        assert_eq!(total_subnets(22), 4_194_304);
        assert_eq!(addresses_per_subnet(26), 64);
        assert_eq!(addresses_per_subnet(20), 4096);
        assert_eq!(addresses_per_subnet(30), 4);
    }

    #[test]
    fn test_assignable_hosts_floor() {
        assert_eq!(assignable_hosts(26), 62);
        assert_eq!(assignable_hosts(30), 2);
        // Not reachable through validation, but must not underflow.
        assert_eq!(assignable_hosts(32), 0);
    }

    #[test]
    fn test_subnet_count_times_size_rebuilds_class_block() {
        // For every legal (default, new) pair the subnets exactly tile the
        // original class-sized block.
        for (default, range) in [(8u8, 9..=30u8), (16, 17..=30), (24, 25..=30)] {
            for new_prefix in range {
                let total = total_subnets(new_prefix - default);
                let per = addresses_per_subnet(new_prefix);
                assert_eq!(
                    total * per,
                    1u64 << (32 - u32::from(default)),
                    "tiling broken for default /{default} new /{new_prefix}"
                );
            }
        }
    }

    #[test]
    fn test_enumerate_first_subnets() {
        let base = Ipv4Addr::new(192, 168, 1, 0);
        let subnets = enumerate(base, 4, 64, SUBNET_LIST_LIMIT);
        assert_eq!(subnets.len(), 4);

        let first = &subnets[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(first.broadcast, Ipv4Addr::new(192, 168, 1, 63));
        assert_eq!(first.first_host, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(first.last_host, Ipv4Addr::new(192, 168, 1, 62));

        let last = &subnets[3];
        assert_eq!(last.index, 4);
        assert_eq!(last.network, Ipv4Addr::new(192, 168, 1, 192));
        assert_eq!(last.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(last.first_host, Ipv4Addr::new(192, 168, 1, 193));
        assert_eq!(last.last_host, Ipv4Addr::new(192, 168, 1, 254));
    }

    #[test]
    fn test_enumerate_respects_limit() {
        let base = Ipv4Addr::new(172, 16, 0, 0);
        let subnets = enumerate(base, 16, 4096, SUBNET_LIST_LIMIT);
        assert_eq!(subnets.len(), 5);
        assert_eq!(subnets[4].network, Ipv4Addr::new(172, 16, 64, 0));
        assert_eq!(subnets[4].broadcast, Ipv4Addr::new(172, 16, 79, 255));
    }

    #[test]
    fn test_enumerate_is_idempotent() {
        let base = Ipv4Addr::new(10, 0, 0, 0);
        let first = enumerate(base, 8, 256, SUBNET_LIST_LIMIT);
        let second = enumerate(base, 8, 256, SUBNET_LIST_LIMIT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumerate_class_a_upper_edge() {
        // Last /30 block of class A space still enumerates cleanly.
        let base = Ipv4Addr::new(126, 255, 255, 248);
        let subnets = enumerate(base, 2, 4, SUBNET_LIST_LIMIT);
        assert_eq!(subnets.len(), 2);
        assert_eq!(subnets[1].broadcast, Ipv4Addr::new(126, 255, 255, 255));
    }
}
