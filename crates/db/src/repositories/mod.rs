//! Repositories, one per entity. Each wraps the pool with entity-specific
//! queries and owns the only consistency logic in the system.

pub mod appointment_repo;
pub mod client_repo;
pub mod pet_repo;

pub use appointment_repo::AppointmentRepo;
pub use client_repo::ClientRepo;
pub use pet_repo::PetRepo;
