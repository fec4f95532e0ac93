//! Typed validation errors for the subnetting engine.
//!
//! Every failure is local input validation; there is nothing transient to
//! retry and nothing here is fatal to a calling loop.

use crate::models::class::AddressClass;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Malformed dotted-decimal string: wrong field count, non-numeric
    /// field, or out-of-range octet.
    #[error("invalid IPv4 address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: String },

    /// Subnetting is only defined for classes A, B, and C.
    #[error("subnetting is not applicable for IP class {class}")]
    ClassNotSubnettable { class: AddressClass },

    /// The requested prefix does not satisfy `default < prefix <= 30`.
    #[error(
        "invalid CIDR prefix /{requested} for a class {class} network (default /{default}): \
         the new prefix must be between /{} and /30",
        .default + 1
    )]
    PrefixOutOfRange {
        class: AddressClass,
        default: u8,
        requested: u8,
    },

    /// Malformed `/n` token at the CLI level, before classful validation.
    #[error("invalid CIDR prefix input {input:?}: {reason}")]
    InvalidPrefixInput { input: String, reason: String },
}
