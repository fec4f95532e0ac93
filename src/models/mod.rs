//! Value types for the subnetting engine.
//!
//! - [`ipv4`] - address parsing and bit-level helpers
//! - [`class`] - legacy address classes
//! - [`mask`] - contiguous subnet masks
//! - [`subnet`] - calculation result types

pub mod class;
pub mod ipv4;
pub mod mask;
pub mod subnet;

// Re-export the main types
pub use class::AddressClass;
pub use ipv4::parse_ipv4;
pub use mask::SubnetMask;
pub use subnet::{SubnetDescriptor, SubnettingResult};
