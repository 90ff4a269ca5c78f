//! Orquestación de maintenances
//!
//! Valida cada alta/edición contra el registro de vehículos y el registro de
//! indisponibilidades antes de persistir. El orden de las comprobaciones es
//! fijo: existencia → reserva → compatibilidad.
//!
//! Entre la comprobación de reserva y el `save` no se mantiene ningún lock:
//! dos altas concurrentes sobre la misma ventana pueden pasar ambas.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::clients::{UnavailabilityRegistry, VehicleRegistry};
use crate::dto::{RequiredMaintenance, UpdateMaintenanceRequest};
use crate::models::{Maintenance, Unavailability, Vehicle};
use crate::repositories::MaintenanceStore;
use crate::utils::errors::{AppError, AppResult};

/// Regla de compatibilidad: el tipo restringido de la ventana debe ser
/// exactamente el tipo del vehículo.
pub fn is_compatible(restricted_vehicle_type: &str, vehicle_type: &str) -> bool {
    restricted_vehicle_type == vehicle_type
}

/// Comprobaciones opcionales de la cadena de validación
#[derive(Debug, Clone, Copy)]
struct Checks {
    reservation: bool,
}

impl Checks {
    const CREATE: Checks = Checks { reservation: true };
    // La edición no vuelve a comprobar la reserva
    const EDIT: Checks = Checks { reservation: false };
}

/// Referencias externas ya resueltas y validadas
#[derive(Debug)]
struct ValidatedReferences {
    vehicle: Vehicle,
    unavailability: Unavailability,
}

#[derive(Clone)]
pub struct MaintenanceService {
    store: Arc<dyn MaintenanceStore>,
    vehicles: Arc<dyn VehicleRegistry>,
    unavailabilities: Arc<dyn UnavailabilityRegistry>,
}

impl MaintenanceService {
    pub fn new(
        store: Arc<dyn MaintenanceStore>,
        vehicles: Arc<dyn VehicleRegistry>,
        unavailabilities: Arc<dyn UnavailabilityRegistry>,
    ) -> Self {
        Self {
            store,
            vehicles,
            unavailabilities,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Maintenance>> {
        self.store.find_all().await
    }

    /// Lista de 0 o 1 elementos; un fallo del store se expone como `MaintenanceNotFound`
    pub async fn find_by_id(&self, id: i32) -> AppResult<Vec<Maintenance>> {
        self.store.find_by_id(id).await.map_err(|e| {
            warn!(maintenance_id = id, error = %e, "lookup failed");
            AppError::MaintenanceNotFound(id)
        })
    }

    pub async fn find_by_vehicle(&self, vehicle_id: i32) -> AppResult<Vec<Maintenance>> {
        self.store.find_by_vehicle_id(vehicle_id).await.map_err(|e| {
            warn!(vehicle_id, error = %e, "lookup by vehicle failed");
            AppError::MaintenanceNotFound(vehicle_id)
        })
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: RequiredMaintenance) -> AppResult<Maintenance> {
        let refs = self
            .validate(request.vehicle_id, request.unavailability_id, Checks::CREATE)
            .await?;

        let maintenance = self
            .store
            .save(Maintenance::new(refs.vehicle.id, refs.unavailability.id))
            .await?;

        info!(maintenance_id = ?maintenance.id, "✅ maintenance created");
        Ok(maintenance)
    }

    /// Edición del registro completo. Los errores de negocio conservan su
    /// tipo; cualquier otro fallo se devuelve como `BadRequest`.
    #[instrument(skip(self, request))]
    pub async fn edit(&self, id: i32, request: UpdateMaintenanceRequest) -> AppResult<Maintenance> {
        self.apply_edit(id, &request).await.map_err(|e| {
            if e.is_business_rule() {
                e
            } else {
                AppError::BadRequest(e.to_string())
            }
        })
    }

    async fn apply_edit(&self, id: i32, request: &UpdateMaintenanceRequest) -> AppResult<Maintenance> {
        let mut maintenance = self.require_maintenance(id).await?;

        self.validate(request.vehicle_id, request.unavailability_id, Checks::EDIT)
            .await?;

        maintenance.vehicle_id = request.vehicle_id;
        maintenance.unavailability_id = request.unavailability_id;

        let updated = self.store.save(maintenance).await?;
        info!(maintenance_id = id, "✏️ maintenance updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let maintenance = self.require_maintenance(id).await?;
        self.store.delete(&maintenance).await?;
        info!(maintenance_id = id, "🗑️ maintenance deleted");
        Ok(())
    }

    async fn require_maintenance(&self, id: i32) -> AppResult<Maintenance> {
        self.store
            .find_by_id(id)
            .await?
            .into_iter()
            .next()
            .ok_or(AppError::MaintenanceNotFound(id))
    }

    /// Cadena de validación común a alta y edición
    async fn validate(
        &self,
        vehicle_id: i32,
        unavailability_id: i32,
        checks: Checks,
    ) -> AppResult<ValidatedReferences> {
        let vehicle = self.resolve_vehicle(vehicle_id).await?;
        let unavailability = self.resolve_unavailability(unavailability_id).await?;

        if checks.reservation {
            check_reservation(&vehicle, &unavailability)?;
        }
        check_compatibility(&vehicle, &unavailability)?;

        Ok(ValidatedReferences {
            vehicle,
            unavailability,
        })
    }

    async fn resolve_vehicle(&self, vehicle_id: i32) -> AppResult<Vehicle> {
        self.vehicles
            .find_vehicle(vehicle_id)
            .await?
            .ok_or(AppError::VehicleNotFound(vehicle_id))
    }

    async fn resolve_unavailability(&self, unavailability_id: i32) -> AppResult<Unavailability> {
        self.unavailabilities
            .find_unavailability(unavailability_id)
            .await?
            .ok_or(AppError::UnavailabilityNotFound(unavailability_id))
    }
}

fn check_reservation(vehicle: &Vehicle, unavailability: &Unavailability) -> AppResult<()> {
    if unavailability.reservation_state.is_reserved() {
        return Err(AppError::VehicleAlreadyReserved(vehicle.id));
    }
    Ok(())
}

fn check_compatibility(vehicle: &Vehicle, unavailability: &Unavailability) -> AppResult<()> {
    if !is_compatible(&unavailability.restricted_vehicle_type, &vehicle.vehicle_type) {
        return Err(AppError::IncompatibleVehicleType {
            vehicle_type: vehicle.vehicle_type.clone(),
            restricted_type: unavailability.restricted_vehicle_type.clone(),
        });
    }
    Ok(())
}
