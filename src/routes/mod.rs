pub mod extract;
pub mod maintenance_routes;
pub mod openapi;

use axum::{routing::get, Router};
use tower::ServiceBuilder;

use crate::middleware::{cors_layer, trace_layer};
use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Vehicle Rental Company Maintenance API!";

/// Router completo de la aplicación
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/api-docs", openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer())
                .layer(cors_layer(cors_origins)),
        )
        .with_state(state)
}

async fn index() -> &'static str {
    WELCOME_MESSAGE
}
