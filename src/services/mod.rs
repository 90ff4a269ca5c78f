//! Services module
//!
//! Lógica de negocio del servicio: la orquestación que valida cada
//! maintenance contra los registros externos antes de persistirla.

pub mod maintenance_service;

pub use maintenance_service::{is_compatible, MaintenanceService};
