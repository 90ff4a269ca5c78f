//! Registros en memoria
//!
//! Implementaciones de los traits de registro respaldadas por un `HashMap`,
//! usadas por los tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::{RegistryError, UnavailabilityRegistry, VehicleRegistry};
use crate::models::{Unavailability, Vehicle};

#[derive(Default)]
pub struct InMemoryVehicleRegistry {
    vehicles: RwLock<HashMap<i32, Vehicle>>,
}

impl InMemoryVehicleRegistry {
    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let registry = Self::default();
        for vehicle in vehicles {
            registry.insert(vehicle);
        }
        registry
    }

    pub fn insert(&self, vehicle: Vehicle) {
        if let Ok(mut vehicles) = self.vehicles.write() {
            vehicles.insert(vehicle.id, vehicle);
        }
    }
}

#[async_trait]
impl VehicleRegistry for InMemoryVehicleRegistry {
    async fn find_vehicle(&self, vehicle_id: i32) -> Result<Option<Vehicle>, RegistryError> {
        Ok(self
            .vehicles
            .read()
            .ok()
            .and_then(|vehicles| vehicles.get(&vehicle_id).cloned()))
    }
}

#[derive(Default)]
pub struct InMemoryUnavailabilityRegistry {
    windows: RwLock<HashMap<i32, Unavailability>>,
}

impl InMemoryUnavailabilityRegistry {
    pub fn with_windows(windows: impl IntoIterator<Item = Unavailability>) -> Self {
        let registry = Self::default();
        for window in windows {
            registry.insert(window);
        }
        registry
    }

    pub fn insert(&self, window: Unavailability) {
        if let Ok(mut windows) = self.windows.write() {
            windows.insert(window.id, window);
        }
    }
}

#[async_trait]
impl UnavailabilityRegistry for InMemoryUnavailabilityRegistry {
    async fn find_unavailability(
        &self,
        unavailability_id: i32,
    ) -> Result<Option<Unavailability>, RegistryError> {
        Ok(self
            .windows
            .read()
            .ok()
            .and_then(|windows| windows.get(&unavailability_id).cloned()))
    }
}
