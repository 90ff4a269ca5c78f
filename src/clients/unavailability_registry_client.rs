use async_trait::async_trait;
use reqwest::Client;

use super::{fetch_zero_or_one, trim_base_url, RegistryError};
use crate::models::Unavailability;

/// Acceso de solo lectura al registro de indisponibilidades
#[async_trait]
pub trait UnavailabilityRegistry: Send + Sync {
    async fn find_unavailability(
        &self,
        unavailability_id: i32,
    ) -> Result<Option<Unavailability>, RegistryError>;
}

/// Cliente HTTP para el registro de indisponibilidades
pub struct HttpUnavailabilityRegistry {
    client: Client,
    base_url: String,
}

impl HttpUnavailabilityRegistry {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }

    fn unavailability_url(&self, unavailability_id: i32) -> String {
        format!("{}/unavailability/{}", self.base_url, unavailability_id)
    }
}

#[async_trait]
impl UnavailabilityRegistry for HttpUnavailabilityRegistry {
    async fn find_unavailability(
        &self,
        unavailability_id: i32,
    ) -> Result<Option<Unavailability>, RegistryError> {
        let unavailability: Option<Unavailability> = fetch_zero_or_one(
            &self.client,
            &self.unavailability_url(unavailability_id),
        )
        .await?;
        if let Some(u) = &unavailability {
            log::info!(
                "📅 Indisponibilidad {} encontrada (tipo {}, {:?})",
                u.id,
                u.restricted_vehicle_type,
                u.reservation_state
            );
        }
        Ok(unavailability)
    }
}
