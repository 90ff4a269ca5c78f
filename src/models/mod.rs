//! Modelos del sistema
//!
//! Entidad persistida (`Maintenance`) y vistas de solo lectura de los
//! registros externos (`Vehicle`, `Unavailability`).

pub mod maintenance;
pub mod unavailability;
pub mod vehicle;

pub use maintenance::Maintenance;
pub use unavailability::{ReservationState, Unavailability};
pub use vehicle::Vehicle;
