use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_maintenance::clients::memory::{InMemoryUnavailabilityRegistry, InMemoryVehicleRegistry};
use fleet_maintenance::models::{Maintenance, ReservationState, Unavailability, Vehicle};
use fleet_maintenance::repositories::{InMemoryMaintenanceRepository, MaintenanceStore};
use fleet_maintenance::routes::{create_router, WELCOME_MESSAGE};
use fleet_maintenance::state::AppState;
use fleet_maintenance::utils::errors::{AppError, AppResult};

fn registries() -> (InMemoryVehicleRegistry, InMemoryUnavailabilityRegistry) {
    let vehicles = InMemoryVehicleRegistry::with_vehicles([
        Vehicle { id: 1, vehicle_type: "SUV".to_string() },
        Vehicle { id: 2, vehicle_type: "Sedan".to_string() },
    ]);
    let windows = InMemoryUnavailabilityRegistry::with_windows([
        Unavailability {
            id: 5,
            restricted_vehicle_type: "SUV".to_string(),
            reservation_state: ReservationState::Available,
        },
        Unavailability {
            id: 6,
            restricted_vehicle_type: "Sedan".to_string(),
            reservation_state: ReservationState::Available,
        },
        Unavailability {
            id: 7,
            restricted_vehicle_type: "SUV".to_string(),
            reservation_state: ReservationState::Reserved,
        },
    ]);
    (vehicles, windows)
}

fn create_test_app_with_store(store: Arc<dyn MaintenanceStore>) -> Router {
    let (vehicles, windows) = registries();
    let state = AppState::from_parts(store, Arc::new(vehicles), Arc::new(windows));
    create_router(state, &[])
}

fn create_test_app() -> Router {
    create_test_app_with_store(Arc::new(InMemoryMaintenanceRepository::new()))
}

/// Store que falla en cada llamada
struct BrokenStore;

#[async_trait]
impl MaintenanceStore for BrokenStore {
    async fn find_all(&self) -> AppResult<Vec<Maintenance>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
    async fn find_by_id(&self, _id: i32) -> AppResult<Vec<Maintenance>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
    async fn find_by_vehicle_id(&self, _vehicle_id: i32) -> AppResult<Vec<Maintenance>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
    async fn save(&self, _maintenance: Maintenance) -> AppResult<Maintenance> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
    async fn delete(&self, _maintenance: &Maintenance) -> AppResult<()> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
}

/// Store con un registro existente cuyo `save` falla
struct ReadOnlyStore;

#[async_trait]
impl MaintenanceStore for ReadOnlyStore {
    async fn find_all(&self) -> AppResult<Vec<Maintenance>> {
        self.find_by_id(1).await
    }
    async fn find_by_id(&self, id: i32) -> AppResult<Vec<Maintenance>> {
        Ok(vec![Maintenance { id: Some(id), vehicle_id: 1, unavailability_id: 5 }])
    }
    async fn find_by_vehicle_id(&self, _vehicle_id: i32) -> AppResult<Vec<Maintenance>> {
        self.find_all().await
    }
    async fn save(&self, _maintenance: Maintenance) -> AppResult<Maintenance> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
    async fn delete(&self, _maintenance: &Maintenance) -> AppResult<()> {
        Ok(())
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_index_welcome_message() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], WELCOME_MESSAGE.as_bytes());
}

#[tokio::test]
async fn test_create_then_list_by_vehicle() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/maintenance",
        Some(json!({ "vehicleId": 1, "unavailabilityId": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Your maintenance has been added!");

    let (status, body) = send(&app, Method::GET, "/maintenance/vehicle/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "vehicleId": 1, "unavailabilityId": 5 }])
    );

    let (status, body) = send(&app, Method::GET, "/maintenance", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_incompatible_type() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/maintenance",
        Some(json!({ "vehicleId": 1, "unavailabilityId": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status"], 405);
    assert_eq!(body["error"], "IncompatibleVehicleType");
    assert!(body["timestamp"].is_string());
    assert!(body["message"].is_string());

    let (_, body) = send(&app, Method::GET, "/maintenance", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_error_kinds() {
    let app = create_test_app();
    let cases = [
        (json!({ "vehicleId": 99, "unavailabilityId": 5 }), StatusCode::NOT_FOUND, "VehicleNotFound"),
        (json!({ "vehicleId": 1, "unavailabilityId": 99 }), StatusCode::NOT_FOUND, "UnavailabilityNotFound"),
        (json!({ "vehicleId": 1, "unavailabilityId": 7 }), StatusCode::METHOD_NOT_ALLOWED, "VehicleAlreadyReserved"),
        (json!({ "vehicleId": 42, "unavailabilityId": 0 }), StatusCode::NOT_FOUND, "VehicleNotFound"),
        (json!({ "vehicleId": 1, "unavailabilityId": 0 }), StatusCode::NOT_FOUND, "UnavailabilityNotFound"),
    ];

    for (payload, expected_status, expected_error) in cases {
        let (status, body) = send(&app, Method::POST, "/maintenance", Some(payload)).await;
        assert_eq!(status, expected_status);
        assert_eq!(body["error"], expected_error);
    }
}

#[tokio::test]
async fn test_malformed_body_returns_error_body() {
    let app = create_test_app();

    let (status, body) = send(&app, Method::POST, "/maintenance", Some(json!({ "vehicleId": 1 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert_eq!(body["error"], "InvalidRequestBody");
    assert!(body["message"].as_str().unwrap().contains("unavailabilityId"));
    assert!(body["timestamp"].is_string());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/maintenance")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "InvalidRequestBody");

    let (_, body) = send(&app, Method::GET, "/maintenance", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_non_numeric_id_returns_error_body() {
    let app = create_test_app();

    for (method, uri) in [
        (Method::GET, "/maintenance/abc"),
        (Method::GET, "/maintenance/vehicle/abc"),
        (Method::DELETE, "/maintenance/abc"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "InvalidPathParameter");
        assert!(body["message"].is_string());
    }

    let (status, body) = send(
        &app,
        Method::PUT,
        "/maintenance/abc",
        Some(json!({ "vehicleId": 1, "unavailabilityId": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidPathParameter");
}

#[tokio::test]
async fn test_get_by_id_returns_zero_or_one() {
    let app = create_test_app();
    let (_, body) = send(&app, Method::GET, "/maintenance/1", None).await;
    assert_eq!(body, json!([]));

    send(
        &app,
        Method::POST,
        "/maintenance",
        Some(json!({ "vehicleId": 2, "unavailabilityId": 6 })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/maintenance/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["vehicleId"], 2);
}

#[tokio::test]
async fn test_update_and_delete_flow() {
    let app = create_test_app();
    send(
        &app,
        Method::POST,
        "/maintenance",
        Some(json!({ "vehicleId": 1, "unavailabilityId": 5 })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/maintenance/1",
        Some(json!({ "id": 1, "vehicleId": 2, "unavailabilityId": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Your maintenance has been updated!");

    let (_, body) = send(&app, Method::GET, "/maintenance/1", None).await;
    assert_eq!(body, json!([{ "id": 1, "vehicleId": 2, "unavailabilityId": 6 }]));

    let (status, body) = send(&app, Method::DELETE, "/maintenance/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = send(&app, Method::GET, "/maintenance/1", None).await;
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, Method::DELETE, "/maintenance/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "MaintenanceNotFound");
}

#[tokio::test]
async fn test_update_incompatible_keeps_record() {
    let app = create_test_app();
    send(
        &app,
        Method::POST,
        "/maintenance",
        Some(json!({ "vehicleId": 1, "unavailabilityId": 5 })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/maintenance/1",
        Some(json!({ "vehicleId": 1, "unavailabilityId": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "IncompatibleVehicleType");

    let (_, body) = send(&app, Method::GET, "/maintenance/1", None).await;
    assert_eq!(body[0]["unavailabilityId"], 5);
}

#[tokio::test]
async fn test_update_missing_maintenance() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/maintenance/3",
        Some(json!({ "vehicleId": 1, "unavailabilityId": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "MaintenanceNotFound");
}

#[tokio::test]
async fn test_update_wraps_unexpected_failure_as_bad_request() {
    let app = create_test_app_with_store(Arc::new(ReadOnlyStore));
    let (status, body) = send(
        &app,
        Method::PUT,
        "/maintenance/1",
        Some(json!({ "vehicleId": 2, "unavailabilityId": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn test_lookup_faults_surface_as_not_found() {
    let app = create_test_app_with_store(Arc::new(BrokenStore));

    let (status, body) = send(&app, Method::GET, "/maintenance/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "MaintenanceNotFound");

    let (status, _) = send(&app, Method::GET, "/maintenance/vehicle/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/maintenance", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "DatabaseError");
}

#[tokio::test]
async fn test_openapi_document_lists_maintenance_paths() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/maintenance"));
    assert!(paths.contains_key("/maintenance/{id}"));
    assert!(paths.contains_key("/maintenance/vehicle/{id}"));
}
