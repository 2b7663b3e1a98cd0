//! Verity core domain.
//!
//! Shared between the enrollment endpoint and the form controller so both
//! sides agree on the option sets, the email rule and the field messages.

pub mod enrollment;
pub mod error;
pub mod options;
pub mod types;
pub mod validation;
