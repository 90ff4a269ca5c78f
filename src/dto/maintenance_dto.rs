use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Request para crear una maintenance. Los ids no se acotan aquí: un id que
// no existe en el registro (incluidos 0 y negativos) da el NotFound del registro.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequiredMaintenance {
    pub vehicle_id: i32,
    pub unavailability_id: i32,
}

// Request para editar una maintenance (registro completo, el id del body se ignora)
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRequest {
    #[serde(default)]
    pub id: Option<i32>,
    pub vehicle_id: i32,
    pub unavailability_id: i32,
}

// Response genérica para operaciones de escritura
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

pub const MAINTENANCE_ADDED: &str = "Your maintenance has been added!";
pub const MAINTENANCE_UPDATED: &str = "Your maintenance has been updated!";
pub const MAINTENANCE_DELETED: &str = "Your maintenance has been deleted!";
