use async_trait::async_trait;
use reqwest::Client;

use super::{fetch_zero_or_one, trim_base_url, RegistryError};
use crate::models::Vehicle;

/// Acceso de solo lectura al registro de vehículos
#[async_trait]
pub trait VehicleRegistry: Send + Sync {
    async fn find_vehicle(&self, vehicle_id: i32) -> Result<Option<Vehicle>, RegistryError>;
}

/// Cliente HTTP para el registro de vehículos
pub struct HttpVehicleRegistry {
    client: Client,
    base_url: String,
}

impl HttpVehicleRegistry {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }

    fn vehicle_url(&self, vehicle_id: i32) -> String {
        format!("{}/vehicle/{}", self.base_url, vehicle_id)
    }
}

#[async_trait]
impl VehicleRegistry for HttpVehicleRegistry {
    async fn find_vehicle(&self, vehicle_id: i32) -> Result<Option<Vehicle>, RegistryError> {
        let vehicle: Option<Vehicle> =
            fetch_zero_or_one(&self.client, &self.vehicle_url(vehicle_id)).await?;
        if let Some(v) = &vehicle {
            log::info!("🚗 Vehículo {} encontrado (tipo {})", v.id, v.vehicle_type);
        }
        Ok(vehicle)
    }
}
