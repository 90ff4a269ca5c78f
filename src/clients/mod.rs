//! Clients - HTTP Clients for External Registries
//!
//! Clientes de solo lectura hacia el registro de vehículos y el registro
//! de indisponibilidades. Ambos devuelven cero o un resultado por id.

pub mod memory;
pub mod unavailability_registry_client;
pub mod vehicle_registry_client;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

pub use unavailability_registry_client::{HttpUnavailabilityRegistry, UnavailabilityRegistry};
pub use vehicle_registry_client::{HttpVehicleRegistry, VehicleRegistry};

/// Fallos de comunicación con un registro externo
///
/// La ausencia de un registro no es un error: se reporta como `None`.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error("invalid payload from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Construir el cliente HTTP compartido por los registros
pub fn build_http_client(timeout: Duration) -> Result<Client, RegistryError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("fleet-maintenance/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(RegistryError::from)
}

/// GET sobre un recurso del registro que responde con un array de 0 o 1 elementos.
/// Un 404 también cuenta como ausencia.
pub(crate) async fn fetch_zero_or_one<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<Option<T>, RegistryError> {
    log::debug!("🌐 Registry lookup: {}", url);

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        log::info!("📭 Registry reported no record at {}", url);
        return Ok(None);
    }
    if !status.is_success() {
        log::error!("❌ Registry lookup failed with status {}: {}", status, url);
        return Err(RegistryError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    let bytes = response.bytes().await?;
    let mut records: Vec<T> =
        serde_json::from_slice(&bytes).map_err(|e| RegistryError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if records.len() > 1 {
        return Err(RegistryError::Decode {
            url: url.to_string(),
            reason: format!("expected at most one record, got {}", records.len()),
        });
    }

    Ok(records.pop())
}

/// Normalizar la URL base (sin `/` final)
pub(crate) fn trim_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}
