use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::dto::{ApiResponse, RequiredMaintenance, UpdateMaintenanceRequest};
use crate::models::Maintenance;
use crate::state::AppState;
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(title = "Vehicle Rental Company Maintenance API"),
    paths(
        crate::routes::maintenance_routes::list_maintenances,
        crate::routes::maintenance_routes::get_maintenance,
        crate::routes::maintenance_routes::get_maintenances_by_vehicle,
        crate::routes::maintenance_routes::create_maintenance,
        crate::routes::maintenance_routes::update_maintenance,
        crate::routes::maintenance_routes::delete_maintenance,
    ),
    components(schemas(
        Maintenance,
        RequiredMaintenance,
        UpdateMaintenanceRequest,
        ApiResponse,
        ErrorResponse
    ))
)]
pub struct ApiDoc;

pub fn create_openapi_router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
