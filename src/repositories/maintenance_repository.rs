use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Maintenance;
use crate::utils::errors::{bad_request_error, AppError, AppResult};

/// Contrato de persistencia de maintenances
///
/// Cada llamada es su propia unidad atómica; no hay transacción que abarque
/// varias llamadas dentro de un request.
#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Maintenance>>;

    /// Devuelve 0 o 1 registros (id es primary key)
    async fn find_by_id(&self, id: i32) -> AppResult<Vec<Maintenance>>;

    async fn find_by_vehicle_id(&self, vehicle_id: i32) -> AppResult<Vec<Maintenance>>;

    /// Inserta si `id` es `None`, actualiza en sitio en caso contrario
    async fn save(&self, maintenance: Maintenance) -> AppResult<Maintenance>;

    async fn delete(&self, maintenance: &Maintenance) -> AppResult<()>;
}

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, maintenance: &Maintenance) -> AppResult<Maintenance> {
        let created = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenance (vehicle_id, unavailability_id)
            VALUES ($1, $2)
            RETURNING id, vehicle_id, unavailability_id
            "#,
        )
        .bind(maintenance.vehicle_id)
        .bind(maintenance.unavailability_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, maintenance: &Maintenance) -> AppResult<Maintenance> {
        sqlx::query_as::<_, Maintenance>(
            r#"
            UPDATE maintenance
            SET vehicle_id = $2, unavailability_id = $3
            WHERE id = $1
            RETURNING id, vehicle_id, unavailability_id
            "#,
        )
        .bind(id)
        .bind(maintenance.vehicle_id)
        .bind(maintenance.unavailability_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::MaintenanceNotFound(id))
    }
}

#[async_trait]
impl MaintenanceStore for MaintenanceRepository {
    async fn find_all(&self) -> AppResult<Vec<Maintenance>> {
        let maintenances = sqlx::query_as::<_, Maintenance>(
            "SELECT id, vehicle_id, unavailability_id FROM maintenance ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(maintenances)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Vec<Maintenance>> {
        let maintenances = sqlx::query_as::<_, Maintenance>(
            "SELECT id, vehicle_id, unavailability_id FROM maintenance WHERE id = $1",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(maintenances)
    }

    async fn find_by_vehicle_id(&self, vehicle_id: i32) -> AppResult<Vec<Maintenance>> {
        let maintenances = sqlx::query_as::<_, Maintenance>(
            "SELECT id, vehicle_id, unavailability_id FROM maintenance WHERE vehicle_id = $1 ORDER BY id",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(maintenances)
    }

    async fn save(&self, maintenance: Maintenance) -> AppResult<Maintenance> {
        match maintenance.id {
            Some(id) => self.update(id, &maintenance).await,
            None => self.insert(&maintenance).await,
        }
    }

    async fn delete(&self, maintenance: &Maintenance) -> AppResult<()> {
        let id = maintenance
            .id
            .ok_or_else(|| bad_request_error("Cannot delete a maintenance that was never saved"))?;

        sqlx::query("DELETE FROM maintenance WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
