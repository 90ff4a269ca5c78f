//! Configuración de conexión a PostgreSQL
//!
//! Abre el pool y garantiza que la tabla `maintenance` exista.

use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

const CREATE_MAINTENANCE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS maintenance (
    id SERIAL PRIMARY KEY,
    vehicle_id INTEGER NOT NULL,
    unavailability_id INTEGER NOT NULL
)
"#;

const CREATE_VEHICLE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_maintenance_vehicle_id ON maintenance (vehicle_id)";

/// Conexión a la base de datos
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Conectar usando la configuración indicada
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🔗 Conectando a PostgreSQL: {}", config.masked_url());
        let pool = config.create_pool().await?;
        info!("✅ PostgreSQL conectado");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Crear la tabla si no existe (idempotente)
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_MAINTENANCE_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(CREATE_VEHICLE_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}
