//! Subnetting calculation logic.
//!
//! - [`validate`] - classful prefix validation
//! - [`enumerate`] - subnet counting and bounded range enumeration

pub mod enumerate;
pub mod validate;

// Re-export public functions
pub use enumerate::{addresses_per_subnet, assignable_hosts, enumerate, total_subnets};
pub use validate::{bits_borrowed, validate_prefix};
