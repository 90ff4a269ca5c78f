//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::clients::{
    build_http_client, HttpUnavailabilityRegistry, HttpVehicleRegistry, RegistryError,
    UnavailabilityRegistry, VehicleRegistry,
};
use crate::config::EnvironmentConfig;
use crate::repositories::{MaintenanceRepository, MaintenanceStore};
use crate::services::MaintenanceService;

#[derive(Clone)]
pub struct AppState {
    pub maintenance_service: MaintenanceService,
}

impl AppState {
    pub fn new(maintenance_service: MaintenanceService) -> Self {
        Self { maintenance_service }
    }

    /// Ensamblar el estado con los colaboradores indicados
    pub fn from_parts(
        store: Arc<dyn MaintenanceStore>,
        vehicles: Arc<dyn VehicleRegistry>,
        unavailabilities: Arc<dyn UnavailabilityRegistry>,
    ) -> Self {
        Self::new(MaintenanceService::new(store, vehicles, unavailabilities))
    }

    /// Estado de producción: PostgreSQL + registros HTTP
    pub fn production(
        pool: sqlx::PgPool,
        config: &EnvironmentConfig,
    ) -> Result<Self, RegistryError> {
        let http_client = build_http_client(config.registry_timeout)?;

        Ok(Self::from_parts(
            Arc::new(MaintenanceRepository::new(pool)),
            Arc::new(HttpVehicleRegistry::new(
                http_client.clone(),
                config.vehicle_registry_url.clone(),
            )),
            Arc::new(HttpUnavailabilityRegistry::new(
                http_client,
                config.unavailability_registry_url.clone(),
            )),
        ))
    }
}
