//! Vista externa de Vehicle
//!
//! El registro de vehículos es dueño de estos datos; aquí solo se guarda
//! una copia de solo lectura por request.

use serde::{Deserialize, Serialize};

/// Vehículo tal como lo devuelve el registro de vehículos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i32,
    /// Categoría del vehículo (p. ej. "SUV")
    #[serde(rename = "type")]
    pub vehicle_type: String,
}
