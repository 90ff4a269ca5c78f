//! Store en memoria
//!
//! Implementación de `MaintenanceStore` sobre un `BTreeMap`, con ids
//! secuenciales como un `SERIAL` de PostgreSQL.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::MaintenanceStore;
use crate::models::Maintenance;
use crate::utils::errors::{bad_request_error, AppError, AppResult};

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, Maintenance>,
}

#[derive(Default)]
pub struct InMemoryMaintenanceRepository {
    inner: RwLock<Inner>,
}

impl InMemoryMaintenanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MaintenanceStore for InMemoryMaintenanceRepository {
    async fn find_all(&self) -> AppResult<Vec<Maintenance>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Vec<Maintenance>> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .into_iter()
            .collect())
    }

    async fn find_by_vehicle_id(&self, vehicle_id: i32) -> AppResult<Vec<Maintenance>> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .values()
            .filter(|m| m.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut maintenance: Maintenance) -> AppResult<Maintenance> {
        let mut inner = self.inner.write().await;
        let id = match maintenance.id {
            Some(id) if inner.rows.contains_key(&id) => id,
            Some(id) => return Err(AppError::MaintenanceNotFound(id)),
            None => {
                inner.next_id += 1;
                inner.next_id
            }
        };
        maintenance.id = Some(id);
        inner.rows.insert(id, maintenance.clone());
        Ok(maintenance)
    }

    async fn delete(&self, maintenance: &Maintenance) -> AppResult<()> {
        let id = maintenance
            .id
            .ok_or_else(|| bad_request_error("Cannot delete a maintenance that was never saved"))?;
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }
}
