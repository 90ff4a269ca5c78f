//! Modelo de Maintenance
//!
//! Mapea la tabla `maintenance`: un registro que vincula un vehículo con
//! una ventana de indisponibilidad programada para su mantenimiento.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Maintenance principal - mapea exactamente a la tabla maintenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    /// Asignado por el store en el primer `save`
    pub id: Option<i32>,
    pub vehicle_id: i32,
    pub unavailability_id: i32,
}

impl Maintenance {
    /// Nuevo registro todavía sin persistir
    pub fn new(vehicle_id: i32, unavailability_id: i32) -> Self {
        Self {
            id: None,
            vehicle_id,
            unavailability_id,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
