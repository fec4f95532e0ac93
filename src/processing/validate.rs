//! Classful validation of a requested subnet prefix.

use crate::error::SubnetError;
use crate::models::class::AddressClass;

/// Largest prefix a classful network can be subnetted to. /31 and /32 are
/// rejected; point-to-point and host-route special cases are out of scope.
pub const MAX_SUBNET_PREFIX: u8 = 30;

/// Validate `new_prefix` against the class's rules.
///
/// At least one bit must be borrowed (`new_prefix` strictly greater than
/// the class default) and at least two host bits must remain
/// (`new_prefix <= 30`). Returns the class's default prefix on success.
pub fn validate_prefix(class: AddressClass, new_prefix: u8) -> Result<u8, SubnetError> {
    let default = class
        .default_prefix()
        .ok_or(SubnetError::ClassNotSubnettable { class })?;

    if new_prefix <= default || new_prefix > MAX_SUBNET_PREFIX {
        return Err(SubnetError::PrefixOutOfRange {
            class,
            default,
            requested: new_prefix,
        });
    }
    Ok(default)
}

/// Network bits taken from the host portion relative to the class default.
pub fn bits_borrowed(default_prefix: u8, new_prefix: u8) -> u8 {
    new_prefix - default_prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_prefixes_per_class() {
        for prefix in 9..=30 {
            assert_eq!(validate_prefix(AddressClass::A, prefix).unwrap(), 8);
        }
        for prefix in 17..=30 {
            assert_eq!(validate_prefix(AddressClass::B, prefix).unwrap(), 16);
        }
        for prefix in 25..=30 {
            assert_eq!(validate_prefix(AddressClass::C, prefix).unwrap(), 24);
        }
    }

    #[test]
    fn test_prefix_must_borrow_at_least_one_bit() {
        // Equal to the default is rejected: nothing would be borrowed.
        assert_eq!(
            validate_prefix(AddressClass::C, 24).unwrap_err(),
            SubnetError::PrefixOutOfRange {
                class: AddressClass::C,
                default: 24,
                requested: 24,
            }
        );
        assert!(validate_prefix(AddressClass::B, 12).is_err());
        assert!(validate_prefix(AddressClass::A, 0).is_err());
    }

    #[test]
    fn test_point_to_point_and_host_routes_rejected() {
        assert!(validate_prefix(AddressClass::C, 31).is_err());
        assert!(validate_prefix(AddressClass::C, 32).is_err());
        assert!(validate_prefix(AddressClass::A, 31).is_err());
    }

    #[test]
    fn test_unsubnettable_classes() {
        for class in [AddressClass::D, AddressClass::E, AddressClass::Invalid] {
            assert_eq!(
                validate_prefix(class, 26).unwrap_err(),
                SubnetError::ClassNotSubnettable { class }
            );
        }
    }

    #[test]
    fn test_bits_borrowed() {
        assert_eq!(bits_borrowed(24, 26), 2);
        assert_eq!(bits_borrowed(16, 20), 4);
        assert_eq!(bits_borrowed(8, 30), 22);
    }
}
