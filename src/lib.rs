//! Classful IPv4 subnetting calculator.
//!
//! Pure computation pipeline: dotted-decimal string -> [`Ipv4Addr`] ->
//! legacy [`AddressClass`] -> validated prefix -> [`SubnetMask`] ->
//! enumerated subnets. Every function is a pure function of its inputs;
//! nothing persists between calls.

pub mod error;
pub mod lookup;
pub mod models;
pub mod output;
pub mod processing;
pub mod shell;

use error::SubnetError;
use models::class::AddressClass;
use models::ipv4::{network_addr, parse_ipv4};
use models::mask::SubnetMask;
use models::subnet::SubnettingResult;
use processing::enumerate::{self, DETAIL_LISTING_MAX, SUBNET_LIST_LIMIT};
use processing::validate;

/// Parse an address string and identify its legacy class.
pub fn classify_address(text: &str) -> Result<AddressClass, SubnetError> {
    let addr = parse_ipv4(text)?;
    Ok(AddressClass::of(addr))
}

/// Run the full subnetting calculation for an address and target prefix.
///
/// Either a complete [`SubnettingResult`] comes back or a single typed
/// error; never a partial result.
pub fn compute_subnetting(text: &str, new_prefix: u8) -> Result<SubnettingResult, SubnetError> {
    let address = parse_ipv4(text)?;
    let class = AddressClass::of(address);
    let default_prefix = validate::validate_prefix(class, new_prefix)?;

    let bits_borrowed = validate::bits_borrowed(default_prefix, new_prefix);
    let new_mask = SubnetMask::from_prefix(new_prefix);
    let network_address = network_addr(address, new_prefix);
    let total_subnets = enumerate::total_subnets(bits_borrowed);
    let addresses_per_subnet = enumerate::addresses_per_subnet(new_prefix);

    log::debug!(
        "compute_subnetting: {address}/{new_prefix} class {class} \
         borrowed {bits_borrowed} total {total_subnets}"
    );

    // Listing policy: materialize descriptors only for small subnet counts.
    let subnets = if total_subnets <= DETAIL_LISTING_MAX {
        enumerate::enumerate(
            network_address,
            total_subnets,
            addresses_per_subnet,
            SUBNET_LIST_LIMIT,
        )
    } else {
        Vec::new()
    };

    Ok(SubnettingResult {
        address,
        network_address,
        class,
        default_mask: SubnetMask::from_prefix(default_prefix),
        default_prefix,
        new_mask,
        new_prefix,
        bits_borrowed,
        total_subnets,
        addresses_per_subnet,
        assignable_hosts: enumerate::assignable_hosts(new_prefix),
        subnets,
    })
}
