use axum::{extract::State, routing::get, Json, Router};

use crate::dto::{
    ApiResponse, RequiredMaintenance, UpdateMaintenanceRequest, MAINTENANCE_ADDED,
    MAINTENANCE_DELETED, MAINTENANCE_UPDATED,
};
use crate::models::Maintenance;
use crate::routes::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_maintenances).post(create_maintenance))
        .route(
            "/:id",
            get(get_maintenance)
                .put(update_maintenance)
                .delete(delete_maintenance),
        )
        .route("/vehicle/:id", get(get_maintenances_by_vehicle))
}

/// Ver todas las maintenances de la base de datos
#[utoipa::path(
    get,
    path = "/maintenance",
    responses((status = 200, description = "All maintenances", body = [Maintenance]))
)]
pub async fn list_maintenances(
    State(state): State<AppState>,
) -> Result<Json<Vec<Maintenance>>, AppError> {
    let maintenances = state.maintenance_service.list().await?;
    Ok(Json(maintenances))
}

/// Ver una maintenance concreta (array de 0 o 1 elementos)
#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    params(("id" = i32, Path, description = "Maintenance id")),
    responses(
        (status = 200, description = "Zero or one maintenance", body = [Maintenance]),
        (status = 400, description = "Non-numeric id", body = crate::utils::errors::ErrorResponse),
        (status = 404, description = "Lookup failed", body = crate::utils::errors::ErrorResponse)
    )
)]
pub async fn get_maintenance(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Vec<Maintenance>>, AppError> {
    let maintenances = state.maintenance_service.find_by_id(id).await?;
    Ok(Json(maintenances))
}

/// Ver las maintenances de un vehículo
#[utoipa::path(
    get,
    path = "/maintenance/vehicle/{id}",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Maintenances of the vehicle", body = [Maintenance]),
        (status = 404, description = "Lookup failed", body = crate::utils::errors::ErrorResponse)
    )
)]
pub async fn get_maintenances_by_vehicle(
    State(state): State<AppState>,
    ApiPath(vehicle_id): ApiPath<i32>,
) -> Result<Json<Vec<Maintenance>>, AppError> {
    let maintenances = state.maintenance_service.find_by_vehicle(vehicle_id).await?;
    Ok(Json(maintenances))
}

/// Crear una maintenance
#[utoipa::path(
    post,
    path = "/maintenance",
    request_body = RequiredMaintenance,
    responses(
        (status = 200, description = "Maintenance added", body = ApiResponse),
        (status = 400, description = "Invalid payload", body = crate::utils::errors::ErrorResponse),
        (status = 404, description = "Vehicle or unavailability not found", body = crate::utils::errors::ErrorResponse),
        (status = 405, description = "Vehicle already reserved or incompatible type", body = crate::utils::errors::ErrorResponse)
    )
)]
pub async fn create_maintenance(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RequiredMaintenance>,
) -> Result<Json<ApiResponse>, AppError> {
    state.maintenance_service.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(MAINTENANCE_ADDED)))
}

/// Editar una maintenance existente
#[utoipa::path(
    put,
    path = "/maintenance/{id}",
    params(("id" = i32, Path, description = "Maintenance id")),
    request_body = UpdateMaintenanceRequest,
    responses(
        (status = 200, description = "Maintenance updated", body = ApiResponse),
        (status = 400, description = "Unexpected failure", body = crate::utils::errors::ErrorResponse),
        (status = 404, description = "Maintenance, vehicle or unavailability not found", body = crate::utils::errors::ErrorResponse),
        (status = 405, description = "Incompatible vehicle type", body = crate::utils::errors::ErrorResponse)
    )
)]
pub async fn update_maintenance(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateMaintenanceRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    state.maintenance_service.edit(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(MAINTENANCE_UPDATED)))
}

/// Eliminar una maintenance
#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    params(("id" = i32, Path, description = "Maintenance id")),
    responses(
        (status = 200, description = "Maintenance deleted", body = ApiResponse),
        (status = 404, description = "Maintenance not found", body = crate::utils::errors::ErrorResponse)
    )
)]
pub async fn delete_maintenance(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse>, AppError> {
    state.maintenance_service.delete(id).await?;
    Ok(Json(ApiResponse::success_with_message(MAINTENANCE_DELETED)))
}
