//! Vista externa de Unavailability
//!
//! Ventana de indisponibilidad gestionada por el registro de planificación.

use serde::{Deserialize, Serialize};

/// Estado de reserva - mapea el campo `reservationState` del registro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationState {
    Available,
    Reserved,
}

impl ReservationState {
    pub fn is_reserved(self) -> bool {
        self == ReservationState::Reserved
    }
}

/// Ventana de indisponibilidad restringida a un tipo de vehículo.
/// `reservationState` es obligatorio: sin él la ventana no se puede dar por libre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unavailability {
    pub id: i32,
    #[serde(alias = "typeVehicle")]
    pub restricted_vehicle_type: String,
    pub reservation_state: ReservationState,
}
