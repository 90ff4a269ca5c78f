//! Repositorios
//!
//! Persistencia de maintenances: PostgreSQL en producción, memoria en tests.

pub mod maintenance_repository;
pub mod memory;

pub use maintenance_repository::{MaintenanceRepository, MaintenanceStore};
pub use memory::InMemoryMaintenanceRepository;
