use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use trip_planner::backend::domain::geocoding_service::{GeocodingError, PlaceLookup};
use trip_planner::backend::domain::models::route::{Coordinates, HomeBase};
use trip_planner::backend::storage::DbConnection;
use trip_planner::backend::{create_router, initialize_with};

const ORIGIN: &str = "http://localhost:8080";

struct StubLookup;

#[async_trait]
impl PlaceLookup for StubLookup {
    async fn search(&self, query: &str) -> Result<Option<Coordinates>, GeocodingError> {
        match query {
            "Lisbon" => Ok(Some(Coordinates { latitude: 38.7223, longitude: -9.1393 })),
            "offline" => Err(GeocodingError::Status(503)),
            _ => Ok(None),
        }
    }
}

async fn app_over(db: DbConnection) -> Router {
    let state = initialize_with(db, Arc::new(StubLookup), HomeBase::default())
        .await
        .unwrap();
    create_router(state, ORIGIN).unwrap()
}

async fn app() -> Router {
    app_over(DbConnection::in_memory().await.unwrap()).await
}

async fn send_raw(app: &Router, method: Method, uri: &str, body: Body) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, name: &str, latitude: f64, longitude: f64) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/destinations",
        Some(json!({"name": name, "latitude": latitude, "longitude": longitude})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["destination"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_plan_a_trip_within_budget() {
    let app = app().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/settings",
        Some(json!({"total_budget": 1000.0, "people_count": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let lisbon = create(&app, "Lisbon", 38.7223, -9.1393).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/destinations/{lisbon}/flights"),
        Some(json!({
            "link": "https://flights.example/lis",
            "start_date": "2025-05-01",
            "end_date": "2025-05-08",
            "price_per_person": 100.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let flight_id = body["destination"]["flights"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/destinations/{lisbon}/accommodations"),
        Some(json!({"link": "https://stay.example/alfama", "description": "Flat", "total_price": 400.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let accommodation_id = body["destination"]["accommodations"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/destinations/{lisbon}/budget"),
        Some(json!({
            "flight_allocations": {(flight_id): 3},
            "accommodation_id": accommodation_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["flight_cost"], 300.0);
    assert_eq!(body["accommodation_cost"], 400.0);
    assert_eq!(body["total_cost"], 700.0);
    assert_eq!(body["remaining"], 300.0);
    assert_eq!(body["over_budget"], false);
    assert_eq!(body["warnings"], json!([]));
}

#[tokio::test]
async fn test_over_budget_is_reported_not_rejected() {
    let app = app().await;
    send(
        &app,
        Method::PUT,
        "/api/settings",
        Some(json!({"total_budget": 1000.0, "people_count": 8})),
    )
    .await;
    let id = create(&app, "Oslo", 59.9139, 10.7522).await;

    let (_, body) = send(
        &app,
        Method::POST,
        &format!("/api/destinations/{id}/flights"),
        Some(json!({"link": "https://f", "price_per_person": 100.0})),
    )
    .await;
    let flight_id = body["destination"]["flights"][0]["id"].as_str().unwrap().to_string();
    let (_, body) = send(
        &app,
        Method::POST,
        &format!("/api/destinations/{id}/accommodations"),
        Some(json!({"link": "https://a", "total_price": 400.0})),
    )
    .await;
    let accommodation_id = body["destination"]["accommodations"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/destinations/{id}/budget"),
        Some(json!({
            "flight_allocations": {(flight_id): 8},
            "accommodation_id": accommodation_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_cost"], 1200.0);
    assert_eq!(body["remaining"], -200.0);
    assert_eq!(body["over_budget"], true);
}

#[tokio::test]
async fn test_error_statuses() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/destinations",
        Some(json!({"name": "Nowhere", "latitude": 120.0, "longitude": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/destinations/missing",
        Some(json!({"name": "Renamed"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");

    let (status, _) = send(&app, Method::POST, "/api/destinations/missing/select", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = create(&app, "Rome", 41.9028, 12.4964).await;
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/destinations/{id}/flights/missing"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/destinations/{id}/flights"),
        Some(json!({
            "link": "https://f",
            "start_date": "2025-05-08",
            "end_date": "2025-05-01",
            "price_per_person": 50.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
}

#[tokio::test]
async fn test_undecodable_requests_use_error_envelope() {
    let app = app().await;

    let (status, body) = send_raw(&app, Method::POST, "/api/destinations", Body::from("{\"name\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["kind"], "invalid_body");
    assert!(!body["message"].as_str().unwrap().is_empty());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/destinations",
        Some(json!({"name": "Rome", "latitude": "north", "longitude": 12.5})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "invalid_body");

    let (status, body) = send(&app, Method::GET, "/api/geocode", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_query");
}

#[tokio::test]
async fn test_selection_follows_removal() {
    let app = app().await;
    let first = create(&app, "Lisbon", 38.7223, -9.1393).await;
    let second = create(&app, "Porto", 41.1579, -8.6291).await;

    let (status, body) = send(&app, Method::POST, &format!("/api/destinations/{second}/select"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_destination_id"], second.as_str());

    let (status, body) = send(&app, Method::DELETE, &format!("/api/destinations/{second}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed_id"], second.as_str());
    assert_eq!(body["active_destination_id"], first.as_str());

    let (_, body) = send(&app, Method::DELETE, &format!("/api/destinations/{first}"), None).await;
    assert_eq!(body["active_destination_id"], Value::Null);

    let (_, body) = send(&app, Method::GET, "/api/destinations", None).await;
    assert_eq!(body["destinations"], json!([]));
}

#[tokio::test]
async fn test_export_then_import() {
    let app = app().await;
    let id = create(&app, "Lisbon", 38.7223, -9.1393).await;
    send(
        &app,
        Method::POST,
        &format!("/api/destinations/{id}/flights"),
        Some(json!({"link": "https://f", "description": "Direct", "price_per_person": 149.99})),
    )
    .await;

    let request = Request::builder()
        .uri("/api/export")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"trip-plan-"));
    assert!(disposition.ends_with(".json\""));
    let exported = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();

    create(&app, "Temporary", 0.0, 0.0).await;

    let (status, body) = send_raw(&app, Method::POST, "/api/import", Body::from(exported)).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["imported_count"], 1);
    assert_eq!(body["active_destination_id"], id.as_str());

    let (_, body) = send(&app, Method::GET, "/api/destinations", None).await;
    let destinations = body["destinations"].as_array().unwrap();
    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0]["flights"][0]["description"], "Direct");
}

#[tokio::test]
async fn test_rejected_imports_keep_state() {
    let app = app().await;
    let id = create(&app, "Lisbon", 38.7223, -9.1393).await;

    let cases = [
        ("definitely not json", "malformed_json"),
        (r#"{"id": "d1", "name": "Lisbon"}"#, "not_an_array"),
        (r#"[{"name": "No id"}]"#, "missing_fields"),
        (
            r#"[{"id": "d1", "name": "A", "latitude": 1, "longitude": 1},
                {"id": "d1", "name": "B", "latitude": 1, "longitude": 1}]"#,
            "duplicate_id",
        ),
        (
            r#"[{"id": "d1", "name": "A", "latitude": 1, "longitude": 1,
                "accommodations": [
                    {"id": "a1", "link": "https://a", "totalPrice": 300},
                    {"id": "a1", "link": "https://b", "totalPrice": 400}
                ]}]"#,
            "duplicate_option_id",
        ),
        (r#"[{"id": "d1", "name": "A", "latitude": 1}]"#, "invalid_record"),
    ];

    for (payload, kind) in cases {
        let (status, body) = send_raw(&app, Method::POST, "/api/import", Body::from(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{payload}");
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["kind"], kind);
    }

    let (_, body) = send(&app, Method::GET, "/api/destinations", None).await;
    assert_eq!(body["destinations"][0]["id"], id.as_str());
    assert_eq!(body["destinations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_geocode() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/geocode?q=Lisbon", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["coordinates"]["latitude"], 38.7223);
    assert_eq!(body["discarded"], false);

    let (status, body) = send(&app, Method::GET, "/api/geocode?q=Atlantis", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["coordinates"], Value::Null);

    let (status, body) = send(&app, Method::GET, "/api/geocode?q=offline", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "geocoding");

    let (status, body) = send(&app, Method::GET, "/api/geocode?q=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");

    let (status, _) = send(&app, Method::POST, "/api/geocode/dismiss", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_route_from_home_base() {
    let app = app().await;
    let london = create(&app, "London", 51.5074, -0.1278).await;

    let (status, body) = send(&app, Method::GET, &format!("/api/destinations/{london}/route"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["origin_name"], "Dublin");
    let distance = body["distance_km"].as_f64().unwrap();
    assert!((distance - 463.0).abs() < 5.0, "got {distance}");
}

#[tokio::test]
async fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let first_run = app_over(DbConnection::open(dir.path()).await.unwrap()).await;
    let id = create(&first_run, "Kyoto", 35.0116, 135.7681).await;
    send(
        &first_run,
        Method::PUT,
        "/api/settings",
        Some(json!({"total_budget": 7200.0, "people_count": 2})),
    )
    .await;
    drop(first_run);

    let second_run = app_over(DbConnection::open(dir.path()).await.unwrap()).await;
    let (_, body) = send(&second_run, Method::GET, "/api/destinations", None).await;
    assert_eq!(body["destinations"][0]["id"], id.as_str());
    assert_eq!(body["active_destination_id"], id.as_str());

    let (_, body) = send(&second_run, Method::GET, "/api/settings", None).await;
    assert_eq!(body["settings"]["total_budget"], 7200.0);
    assert_eq!(body["settings"]["people_count"], 2);
}
