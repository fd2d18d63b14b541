//! Entity models and request DTOs, one module per table.

pub mod appointment;
pub mod client;
pub mod pet;
