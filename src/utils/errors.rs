//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de errores del servicio de mantenimiento
//! y su conversión a respuestas HTTP `{timestamp, status, error, message}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::clients::RegistryError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("The vehicle with id {0} does not exist.")]
    VehicleNotFound(i32),

    #[error("The unavailability {0} defined for this vehicle was not found.")]
    UnavailabilityNotFound(i32),

    #[error("Vehicle {0} is already reserved.")]
    VehicleAlreadyReserved(i32),

    #[error("Vehicle type '{vehicle_type}' is not allowed for an unavailability restricted to '{restricted_type}'.")]
    IncompatibleVehicleType {
        vehicle_type: String,
        restricted_type: String,
    },

    #[error("Maintenance not found with ID : {0}")]
    MaintenanceNotFound(i32),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid path parameter: {}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Etiqueta estable que identifica el tipo de error en el body
    pub fn label(&self) -> &'static str {
        match self {
            AppError::VehicleNotFound(_) => "VehicleNotFound",
            AppError::UnavailabilityNotFound(_) => "UnavailabilityNotFound",
            AppError::VehicleAlreadyReserved(_) => "VehicleAlreadyReserved",
            AppError::IncompatibleVehicleType { .. } => "IncompatibleVehicleType",
            AppError::MaintenanceNotFound(_) => "MaintenanceNotFound",
            AppError::BadRequest(_) => "BadRequest",
            AppError::InvalidBody(_) => "InvalidRequestBody",
            AppError::InvalidPath(_) => "InvalidPathParameter",
            AppError::Registry(_) => "RegistryError",
            AppError::Database(_) => "DatabaseError",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::VehicleNotFound(_)
            | AppError::UnavailabilityNotFound(_)
            | AppError::MaintenanceNotFound(_) => StatusCode::NOT_FOUND,
            // Errores de negocio: mismo código que exponía la API original
            AppError::VehicleAlreadyReserved(_) | AppError::IncompatibleVehicleType { .. } => {
                StatusCode::METHOD_NOT_ALLOWED
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // 400 sintaxis, 415 content-type, 422 campos ausentes o de otro tipo
            AppError::InvalidBody(rejection) => rejection.status(),
            AppError::InvalidPath(rejection) => rejection.status(),
            AppError::Registry(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Indica si el error es una regla de negocio con nombre propio
    /// (los demás son fallos de infraestructura)
    pub fn is_business_rule(&self) -> bool {
        !matches!(
            self,
            AppError::Registry(_)
                | AppError::Database(_)
                | AppError::BadRequest(_)
                | AppError::InvalidBody(_)
                | AppError::InvalidPath(_)
        )
    }

    /// Mensaje expuesto al cliente; los fallos internos no filtran detalles de SQL
    fn public_message(&self) -> String {
        match self {
            AppError::Database(_) => "An error occurred while accessing the database".to_string(),
            AppError::Registry(e) => {
                format!("An error occurred while communicating with an external registry: {}", e)
            }
            other => other.to_string(),
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, Serialize, serde::Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, kind = self.label(), "❌ request failed");
        } else {
            tracing::warn!(error = %self, kind = self.label(), "⚠️ request rejected");
        }

        let body = ErrorResponse {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            status: status.as_u16(),
            error: self.label().to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
