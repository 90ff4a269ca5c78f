use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use fleet_maintenance::config::{DatabaseConfig, EnvironmentConfig};
use fleet_maintenance::database::DatabaseConnection;
use fleet_maintenance::routes::create_router;
use fleet_maintenance::state::AppState;
use fleet_maintenance::utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    init_logging();

    info!("🔧 Vehicle Rental Company - Maintenance API");

    let config = EnvironmentConfig::from_env().context("invalid environment configuration")?;
    let db_config = DatabaseConfig::from_env().context("invalid database configuration")?;

    if config.is_development() {
        info!("🧪 Modo desarrollo");
    } else if config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en {}: CORS permisivo", config.environment);
    }

    // Inicializar base de datos
    let db_connection = DatabaseConnection::new(&db_config)
        .await
        .context("error connecting to the database")?;
    db_connection
        .ensure_schema()
        .await
        .context("error preparing the maintenance table")?;

    let state = AppState::production(db_connection.pool().clone(), &config)
        .context("error building registry clients")?;

    info!("🚗 Vehicle registry: {}", config.vehicle_registry_url);
    info!("📅 Unavailability registry: {}", config.unavailability_registry_url);

    let app = create_router(state, &config.cors_origins);

    let addr = config.server_url();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;

    info!("🌐 Servidor iniciando en http://{} ({})", addr, config.environment);
    info!("   GET    /maintenance");
    info!("   GET    /maintenance/:id");
    info!("   GET    /maintenance/vehicle/:id");
    info!("   POST   /maintenance");
    info!("   PUT    /maintenance/:id");
    info!("   DELETE /maintenance/:id");
    info!("   GET    /api-docs/openapi.json");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
