//! Shared types, error taxonomy, and input validation for the vet clinic
//! service.

pub mod error;
pub mod types;
pub mod validation;
